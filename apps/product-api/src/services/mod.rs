//! gRPC service implementations.

pub mod health_service;
pub mod product_service;
