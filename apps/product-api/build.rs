//! Build script for compiling Protocol Buffer definitions.
//!
//! This script compiles the .proto files into Rust code using tonic-build.
//! The generated code is placed in `$OUT_DIR` and included via `tonic::include_proto!`.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=../../proto/product_service.proto");
    println!("cargo:rerun-if-changed=../../proto");

    // Clients are generated too so the in-process tests and tooling can dial
    // the server.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["../../proto/product_service.proto"], &["../../proto"])?;

    Ok(())
}
