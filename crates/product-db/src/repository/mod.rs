//! # Repository Module
//!
//! Persistence contract for products.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ProductCatalog (product-api)                                          │
//! │       │                                                                 │
//! │       │  Arc<dyn ProductStore>                                         │
//! │       ▼                                                                 │
//! │  ProductStore (trait, this module)                                     │
//! │  ├── create(&self, new_product)      → Product (fresh id)              │
//! │  ├── get(&self, id)                  → Product | NotFound              │
//! │  ├── list(&self)                     → Vec<Product>                    │
//! │  ├── list_by_user(&self, user_id)    → Vec<Product>                    │
//! │  ├── update(&self, product)          → rows affected                   │
//! │  ├── delete(&self, id)               → rows affected                   │
//! │  └── delete_owned(&self, id, user)   → rows affected                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository (PostgreSQL)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method is one SQL statement. Dropping the returned future aborts
//! the statement.

use async_trait::async_trait;
use product_core::{NewProduct, Product};
use uuid::Uuid;

use crate::error::DbResult;

pub mod product;

/// Storage operations over the `products` table.
///
/// Mutations that match zero rows are not errors: `update`, `delete` and
/// `delete_owned` report the affected-row count and leave the decision to
/// the caller.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts a product under a freshly generated id and returns it.
    async fn create(&self, new_product: &NewProduct) -> DbResult<Product>;

    /// Fetches one product. `DbError::NotFound` when no row matches.
    async fn get(&self, id: Uuid) -> DbResult<Product>;

    /// Fetches every product in storage order.
    async fn list(&self) -> DbResult<Vec<Product>>;

    /// Fetches the products owned by `user_id`; empty when there are none.
    async fn list_by_user(&self, user_id: Uuid) -> DbResult<Vec<Product>>;

    /// Rewrites name, description and price where both id and user_id match.
    async fn update(&self, product: &Product) -> DbResult<u64>;

    /// Deletes by id, whoever owns the row.
    async fn delete(&self, id: Uuid) -> DbResult<u64>;

    /// Deletes by id only when `user_id` owns the row.
    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> DbResult<u64>;

    /// Round-trips a trivial statement to prove the store is reachable.
    async fn ping(&self) -> DbResult<()>;
}
