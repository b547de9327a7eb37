//! In-memory [`ProductStore`] used by the router tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ProductStore, StoreError, StoreResult};
use crate::models::product::Product;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Product>,
    next_id: i64,
    failure: Option<String>,
    last_window: Option<(i64, i64)>,
}

#[derive(Default)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with a protocol error carrying `message`.
    pub fn fail_with(&self, message: &str) {
        self.inner.lock().unwrap().failure = Some(message.to_owned());
    }

    /// The `(offset, limit)` of the most recent `list` call.
    pub fn last_window(&self) -> Option<(i64, i64)> {
        self.inner.lock().unwrap().last_window
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    fn check(inner: &Inner) -> StoreResult<()> {
        match &inner.failure {
            Some(msg) => Err(StoreError::Database(sqlx::Error::Protocol(msg.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn fetch_by_id(&self, id: i64) -> StoreResult<Product> {
        let inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        inner.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create(&self, name: &str, price: f64) -> StoreResult<Product> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        inner.next_id += 1;
        let product = Product {
            id: inner.next_id,
            name: name.to_owned(),
            price,
        };
        inner.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, name: &str, price: f64) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        if let Some(row) = inner.rows.get_mut(&id) {
            row.name = name.to_owned();
            row.price = price;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        inner.rows.remove(&id);
        Ok(())
    }

    async fn list(&self, offset: i64, limit: i64) -> StoreResult<Vec<Product>> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_window = Some((offset, limit));
        Self::check(&inner)?;
        Ok(inner
            .rows
            .values()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }
}
