//! In-process store used by the handler tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use axum::async_trait;
use tokio::sync::RwLock;

use super::StockRepository;
use crate::{
    error::AppError,
    models::{Stock, StockInput},
};

#[derive(Default)]
pub struct MemoryStockRepository {
    rows: RwLock<BTreeMap<i64, Stock>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later call fail as if the database were unreachable.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Number of operations that reached the store.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Store(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl StockRepository for MemoryStockRepository {
    async fn insert(&self, stock: &StockInput) -> Result<i64, AppError> {
        self.enter()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows
            .write()
            .await
            .insert(id, to_stock(id, stock));
        Ok(id)
    }

    async fn fetch_one(&self, id: i64) -> Result<Stock, AppError> {
        self.enter()?;
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn fetch_all(&self) -> Result<Vec<Stock>, AppError> {
        self.enter()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn update(&self, id: i64, stock: &StockInput) -> Result<u64, AppError> {
        self.enter()?;
        match self.rows.write().await.get_mut(&id) {
            Some(existing) => {
                *existing = to_stock(id, stock);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        self.enter()?;
        Ok(self.rows.write().await.remove(&id).map_or(0, |_| 1))
    }
}

fn to_stock(id: i64, stock: &StockInput) -> Stock {
    Stock {
        stockid: id,
        name: stock.name.clone(),
        price: stock.price,
        company: stock.company.clone(),
    }
}
