use async_trait::async_trait;
use sqlx::PgPool;

use super::{ProductStore, StoreError, StoreResult};
use crate::models::product::Product;

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn fetch_by_id(&self, id: i64) -> StoreResult<Product> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn create(&self, name: &str, price: f64) -> StoreResult<Product> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;

        Ok(Product {
            id,
            name: name.to_owned(),
            price,
        })
    }

    async fn update(&self, id: i64, name: &str, price: f64) -> StoreResult<()> {
        sqlx::query("UPDATE products SET name = $1, price = $2 WHERE id = $3")
            .bind(name)
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self, offset: i64, limit: i64) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }
}
