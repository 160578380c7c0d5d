//! Test doubles shared by the handler, catalog and health tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use product_core::{generate_product_id, NewProduct, Product};
use product_db::{DbError, DbResult, ProductStore};
use uuid::Uuid;

use crate::config::{ApiConfig, DeletePolicy};
use crate::AppState;

pub const ALICE: &str = "11111111-1111-1111-1111-111111111111";
pub const BOB: &str = "22222222-2222-2222-2222-222222222222";

pub fn widget() -> NewProduct {
    NewProduct {
        user_id: Uuid::parse_str(ALICE).unwrap(),
        name: "Widget".to_string(),
        description: "A widget".to_string(),
        price: 100,
    }
}

/// In-memory store with the same matching rules as the PostgreSQL
/// repository. Counts every invocation and can be flipped into a mode where
/// each call fails like an unreachable database.
#[derive(Default)]
pub struct RecordingStore {
    products: Mutex<Vec<Product>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(RecordingStore::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_with_storage_errors(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    fn enter(&self) -> DbResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::ConnectionFailed("store offline".to_string()));
        }
        Ok(())
    }

    fn remove_where(&self, keep: impl Fn(&Product) -> bool) -> u64 {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(keep);
        (before - products.len()) as u64
    }
}

#[async_trait]
impl ProductStore for RecordingStore {
    async fn create(&self, new_product: &NewProduct) -> DbResult<Product> {
        self.enter()?;
        let product = new_product.clone().with_id(generate_product_id());
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn get(&self, id: Uuid) -> DbResult<Product> {
        self.enter()?;
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    async fn list(&self) -> DbResult<Vec<Product>> {
        self.enter()?;
        Ok(self.snapshot())
    }

    async fn list_by_user(&self, user_id: Uuid) -> DbResult<Vec<Product>> {
        self.enter()?;
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|p| p.user_id == user_id)
            .collect())
    }

    async fn update(&self, product: &Product) -> DbResult<u64> {
        self.enter()?;
        let mut products = self.products.lock().unwrap();
        match products
            .iter_mut()
            .find(|p| p.id == product.id && p.user_id == product.user_id)
        {
            Some(stored) => {
                stored.name = product.name.clone();
                stored.description = product.description.clone();
                stored.price = product.price;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> DbResult<u64> {
        self.enter()?;
        Ok(self.remove_where(|p| p.id != id))
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> DbResult<u64> {
        self.enter()?;
        Ok(self.remove_where(|p| !(p.id == id && p.user_id == user_id)))
    }

    async fn ping(&self) -> DbResult<()> {
        self.enter()
    }
}

/// Application state around a recording store.
pub fn state_with(store: Arc<RecordingStore>, delete_policy: DeletePolicy) -> Arc<AppState> {
    let mut config = ApiConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://localhost/products_test".to_string()),
        "LISTEN_ADDRESS" => Some("127.0.0.1:0".to_string()),
        _ => None,
    })
    .unwrap();
    config.delete_policy = delete_policy;

    Arc::new(AppState::new(store, config))
}
