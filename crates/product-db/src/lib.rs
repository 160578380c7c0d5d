//! # product-db: Database Layer for the Product Service
//!
//! This crate provides database access for the product service.
//! It uses PostgreSQL with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product Service Data Flow                          │
//! │                                                                         │
//! │  gRPC handler (Get)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     product-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────────┐                 │   │
//! │  │   │   Database    │    │  ProductRepository  │                 │   │
//! │  │   │   (pool.rs)   │    │  (ProductStore)     │                 │   │
//! │  │   │               │    │                     │                 │   │
//! │  │   │ PgPool        │◄───│ create / get / list │                 │   │
//! │  │   │ Connection    │    │ update / delete     │                 │   │
//! │  │   │ Management    │    │                     │                 │   │
//! │  │   └───────────────┘    └─────────────────────┘                 │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          PostgreSQL: products(id, user_id, name, ...)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`error`] - Database error types
//! - [`repository`] - The `ProductStore` trait and its PostgreSQL implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use product_db::{Database, DbConfig, ProductStore};
//!
//! let db = Database::new(DbConfig::new("postgres://localhost/products")).await?;
//! let products = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::product::ProductRepository;
pub use repository::ProductStore;

/// DDL for the `products` table, shipped for operators and integration tests.
pub const PRODUCTS_SCHEMA: &str = include_str!("../../../schema/products.sql");
