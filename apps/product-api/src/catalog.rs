//! Service layer between the gRPC handlers and storage.
//!
//! Every call is forwarded to the [`ProductStore`] unchanged, errors
//! included. Product ids are assigned by the store, never here.

use std::sync::Arc;

use product_core::{NewProduct, Product};
use product_db::{DbResult, ProductStore};
use uuid::Uuid;

/// Product operations as seen by the transport layer.
#[derive(Clone)]
pub struct ProductCatalog {
    store: Arc<dyn ProductStore>,
}

impl ProductCatalog {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        ProductCatalog { store }
    }

    pub async fn create(&self, new_product: &NewProduct) -> DbResult<Product> {
        self.store.create(new_product).await
    }

    pub async fn get(&self, id: Uuid) -> DbResult<Product> {
        self.store.get(id).await
    }

    pub async fn list(&self) -> DbResult<Vec<Product>> {
        self.store.list().await
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> DbResult<Vec<Product>> {
        self.store.list_by_user(user_id).await
    }

    /// Returns the number of rows changed (0 or 1).
    pub async fn update(&self, product: &Product) -> DbResult<u64> {
        self.store.update(product).await
    }

    pub async fn delete(&self, id: Uuid) -> DbResult<u64> {
        self.store.delete(id).await
    }

    pub async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> DbResult<u64> {
        self.store.delete_owned(id, user_id).await
    }
}
