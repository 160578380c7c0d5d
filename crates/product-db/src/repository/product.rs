//! # Product Repository
//!
//! PostgreSQL implementation of [`ProductStore`].
//!
//! ## Column Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    products table ↔ Product                             │
//! │                                                                         │
//! │  id          UUID PRIMARY KEY   ↔  Product.id          (Uuid)          │
//! │  user_id     UUID               ↔  Product.user_id     (Uuid)          │
//! │  name        TEXT               ↔  Product.name        (String)        │
//! │  price       BIGINT >= 0        ↔  Product.price       (u32)           │
//! │  description TEXT               ↔  Product.description (String)        │
//! │                                                                         │
//! │  PostgreSQL has no unsigned integers, so price is widened to BIGINT    │
//! │  on the way in and narrowed (checked) on the way out.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use product_core::{generate_product_id, NewProduct, Product};

use crate::error::{DbError, DbResult};
use crate::repository::ProductStore;

/// Row shape as stored.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    price: i64,
    description: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = DbError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = u32::try_from(row.price).map_err(|_| {
            DbError::Decode(format!("price {} of product {} is out of range", row.price, row.id))
        })?;

        Ok(Product {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            description: row.description,
            price,
        })
    }
}

fn into_products(rows: Vec<ProductRow>) -> DbResult<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let created = repo.create(&new_product).await?;
/// let fetched = repo.get(created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: PgPool) -> Self {
        ProductRepository { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Stored product carrying its generated id
    /// * `Err(DbError::UniqueViolation)` - id collision
    /// * `Err(DbError::ConnectionFailed | PoolExhausted)` - storage unavailable
    async fn create(&self, new_product: &NewProduct) -> DbResult<Product> {
        let product = new_product.clone().with_id(generate_product_id());

        debug!(id = %product.id, user_id = %product.user_id, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, user_id, name, price, description)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(product.id)
        .bind(product.user_id)
        .bind(&product.name)
        .bind(i64::from(product.price))
        .bind(&product.description)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Product found
    /// * `Err(DbError::NotFound)` - No row with this id
    async fn get(&self, id: Uuid) -> DbResult<Product> {
        debug!(id = %id, "Fetching product");

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, user_id, name, price, description
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Product", id))?;

        Product::try_from(row)
    }

    async fn list(&self) -> DbResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, user_id, name, price, description
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed products");
        into_products(rows)
    }

    async fn list_by_user(&self, user_id: Uuid) -> DbResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, user_id, name, price, description
            FROM products
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(user_id = %user_id, count = rows.len(), "Listed products by user");
        into_products(rows)
    }

    /// Updates name, description and price of an owned product.
    ///
    /// The `WHERE` clause matches on both id and user_id, so a product
    /// addressed with the wrong owner is left untouched and `Ok(0)` is
    /// returned.
    async fn update(&self, product: &Product) -> DbResult<u64> {
        debug!(id = %product.id, user_id = %product.user_id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $1, price = $2, description = $3
            WHERE id = $4 AND user_id = $5
            "#,
        )
        .bind(&product.name)
        .bind(i64::from(product.price))
        .bind(&product.description)
        .bind(product.id)
        .bind(product.user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> DbResult<u64> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> DbResult<u64> {
        debug!(id = %id, user_id = %user_id, "Deleting owned product");

        let result = sqlx::query("DELETE FROM products WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(price: i64) -> ProductRow {
        ProductRow {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            name: "Widget".to_string(),
            price,
            description: "A widget".to_string(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let product = Product::try_from(row(100)).unwrap();
        assert_eq!(product.price, 100);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn test_row_conversion_rejects_out_of_range_price() {
        assert!(matches!(Product::try_from(row(-1)), Err(DbError::Decode(_))));
        assert!(matches!(
            Product::try_from(row(i64::from(u32::MAX) + 1)),
            Err(DbError::Decode(_))
        ));
    }

    // -------------------------------------------------------------------------
    // PostgreSQL round trips. Each test gets a scratch database from
    // DATABASE_URL; run with `cargo test -p product-db -- --ignored`.
    // -------------------------------------------------------------------------

    async fn repo_with_schema(pool: PgPool) -> ProductRepository {
        sqlx::raw_sql(crate::PRODUCTS_SCHEMA)
            .execute(&pool)
            .await
            .unwrap();
        ProductRepository::new(pool)
    }

    fn draft(user_id: Uuid, name: &str) -> NewProduct {
        NewProduct {
            user_id,
            name: name.to_string(),
            description: format!("{} description", name),
            price: 100,
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL pointing at PostgreSQL"]
    async fn test_create_get_delete(pool: PgPool) {
        let repo = repo_with_schema(pool).await;
        let user = Uuid::new_v4();

        let created = repo.create(&draft(user, "Widget")).await.unwrap();
        let again = repo.create(&draft(user, "Widget")).await.unwrap();
        assert_ne!(created.id, again.id);

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);

        assert_eq!(repo.delete(created.id).await.unwrap(), 1);
        assert_eq!(repo.delete(created.id).await.unwrap(), 0);
        assert!(repo.get(created.id).await.unwrap_err().is_not_found());
        assert_eq!(repo.list().await.unwrap(), vec![again]);
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL pointing at PostgreSQL"]
    async fn test_price_round_trips_full_u32_range(pool: PgPool) {
        let repo = repo_with_schema(pool).await;

        let mut new_product = draft(Uuid::new_v4(), "Yacht");
        new_product.price = u32::MAX;
        let created = repo.create(&new_product).await.unwrap();

        assert_eq!(repo.get(created.id).await.unwrap().price, u32::MAX);
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL pointing at PostgreSQL"]
    async fn test_oversized_stored_price_is_decode_error(pool: PgPool) {
        let repo = repo_with_schema(pool.clone()).await;
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO products (id, user_id, name, price, description) VALUES ($1, $2, 'Bad', $3, '')",
        )
        .bind(id)
        .bind(Uuid::new_v4())
        .bind(i64::from(u32::MAX) + 1)
        .execute(&pool)
        .await
        .unwrap();

        assert!(matches!(repo.get(id).await, Err(DbError::Decode(_))));
        assert!(matches!(repo.list().await, Err(DbError::Decode(_))));
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL pointing at PostgreSQL"]
    async fn test_list_by_user_is_subset_of_list(pool: PgPool) {
        let repo = repo_with_schema(pool).await;
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let a = repo.create(&draft(alice, "A")).await.unwrap();
        let b = repo.create(&draft(bob, "B")).await.unwrap();

        let mut all = repo.list().await.unwrap();
        all.sort_by(|x, y| x.name.cmp(&y.name));
        assert_eq!(all, vec![a.clone(), b]);

        assert_eq!(repo.list_by_user(alice).await.unwrap(), vec![a]);
        assert!(repo.list_by_user(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL pointing at PostgreSQL"]
    async fn test_update_requires_matching_owner(pool: PgPool) {
        let repo = repo_with_schema(pool).await;
        let owner = Uuid::new_v4();
        let created = repo.create(&draft(owner, "Widget")).await.unwrap();

        let mut hijack = created.clone();
        hijack.user_id = Uuid::new_v4();
        hijack.name = "Stolen".to_string();
        assert_eq!(repo.update(&hijack).await.unwrap(), 0);
        assert_eq!(repo.get(created.id).await.unwrap(), created);

        let mut edit = created.clone();
        edit.name = "Gadget".to_string();
        edit.price = 250;
        assert_eq!(repo.update(&edit).await.unwrap(), 1);
        assert_eq!(repo.get(created.id).await.unwrap(), edit);

        let mut missing = edit.clone();
        missing.id = Uuid::new_v4();
        assert_eq!(repo.update(&missing).await.unwrap(), 0);
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL pointing at PostgreSQL"]
    async fn test_delete_owned_requires_matching_owner(pool: PgPool) {
        let repo = repo_with_schema(pool).await;
        let owner = Uuid::new_v4();
        let created = repo.create(&draft(owner, "Widget")).await.unwrap();

        assert_eq!(repo.delete_owned(created.id, Uuid::new_v4()).await.unwrap(), 0);
        assert_eq!(repo.get(created.id).await.unwrap(), created);
        assert_eq!(repo.delete_owned(created.id, owner).await.unwrap(), 1);
        assert!(repo.get(created.id).await.unwrap_err().is_not_found());
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL pointing at PostgreSQL"]
    async fn test_ping(pool: PgPool) {
        let repo = repo_with_schema(pool).await;
        repo.ping().await.unwrap();
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL pointing at PostgreSQL"]
    async fn test_closed_pool_reports_connection_failure(pool: PgPool) {
        let repo = repo_with_schema(pool.clone()).await;
        pool.close().await;

        assert!(matches!(repo.ping().await, Err(DbError::ConnectionFailed(_))));
        assert!(matches!(
            repo.create(&draft(Uuid::new_v4(), "Late")).await,
            Err(DbError::ConnectionFailed(_))
        ));
    }
}
