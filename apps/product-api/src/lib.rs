//! # Product API
//!
//! gRPC server exposing CRUD over the product entity.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Product API                                    │
//! │                                                                         │
//! │  ┌────────────────────────┐         ┌────────────────────────┐         │
//! │  │  ProductService        │         │  HealthService         │         │
//! │  │  (services/product_*)  │         │  (services/health_*)   │         │
//! │  │                        │         │                        │         │
//! │  │ • Create   • Get       │         │ • Check                │         │
//! │  │ • List     • ListByUser│         │                        │         │
//! │  │ • Update   • Delete    │         │                        │         │
//! │  └───────────┬────────────┘         └───────────┬────────────┘         │
//! │              │ parse ids, map status            │                      │
//! │              ▼                                  │                      │
//! │  ┌────────────────────────┐                     │                      │
//! │  │  ProductCatalog        │                     │                      │
//! │  │  (catalog.rs)          │                     │                      │
//! │  └───────────┬────────────┘                     │                      │
//! │              ▼                                  ▼                      │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │            Arc<dyn ProductStore>  (product-db, PostgreSQL)        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `LISTEN_ADDRESS` - gRPC listen address (default: 0.0.0.0:8081)
//! - `DATABASE_URL` - PostgreSQL connection string (required)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 20)
//! - `DB_MIN_CONNECTIONS` - Idle pool floor (default: 1)
//! - `DB_ACQUIRE_TIMEOUT_SECS` - Pool wait (default: 30)
//! - `REQUEST_TIMEOUT_SECS` - Per-RPC deadline (default: 30)
//! - `MAX_MESSAGE_SIZE` - Max decoded request size (default: 4194304)
//! - `DELETE_POLICY` - `unchecked` or `owner-checked` (default: unchecked)

use std::sync::Arc;

use product_db::ProductStore;

pub mod catalog;
pub mod config;
pub mod error;
pub mod proto;
pub mod server;
pub mod services;

#[cfg(test)]
mod testing;

// Re-exports
pub use catalog::ProductCatalog;
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state.
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, config: ApiConfig) -> Self {
        AppState { store, config }
    }
}
