//! # product-core: Domain Types for the Product Service
//!
//! This crate holds the product entity and the identifier rules every layer
//! agrees on. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Service Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 product-api (gRPC handlers)                     │   │
//! │  │    Create, Get, List, ListByUser, Update, Delete                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ product-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐  ┌────────────────┐  ┌────────────────┐   │   │
//! │  │   │     types      │  │   validation   │  │     error      │   │   │
//! │  │   │   Product      │  │   parse_id     │  │ ValidationError│   │   │
//! │  │   │   NewProduct   │  │                │  │                │   │   │
//! │  │   └────────────────┘  └────────────────┘  └────────────────┘   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 product-db (PostgreSQL)                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use product_core::validation::parse_id;
//! use product_core::NewProduct;
//!
//! let user_id = parse_id("user_id", "11111111-1111-1111-1111-111111111111").unwrap();
//! let draft = NewProduct {
//!     user_id,
//!     name: "Widget".to_string(),
//!     description: "A widget".to_string(),
//!     price: 100,
//! };
//! assert_eq!(draft.price, 100);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;
