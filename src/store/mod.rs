//! Persistence seam for the `products` table.
//!
//! Handlers talk to a [`ProductStore`] so the router can be exercised against
//! an in-memory store in tests and against PostgreSQL in production.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::models::product::Product;

pub use postgres::PgProductStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Looks up a single product. Fails with [`StoreError::NotFound`] when no row matches.
    async fn fetch_by_id(&self, id: i64) -> StoreResult<Product>;

    /// Inserts a product and returns it with the generated id.
    async fn create(&self, name: &str, price: f64) -> StoreResult<Product>;

    /// Overwrites name and price. Matching zero rows is not an error.
    async fn update(&self, id: i64, name: &str, price: f64) -> StoreResult<()>;

    /// Removes a product. Matching zero rows is not an error.
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Returns up to `limit` products starting at `offset`, in scan order.
    async fn list(&self, offset: i64, limit: i64) -> StoreResult<Vec<Product>>;
}
