//! Data access for the `stocks` table.

mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgStockRepository;

use axum::async_trait;

use crate::{
    error::AppError,
    models::{Stock, StockInput},
};

/// Storage operations behind the HTTP handlers.
///
/// Each call runs exactly one statement. Missing rows on `update` and `delete`
/// are reported as zero rows affected, not as errors.
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Inserts a record and returns the id assigned by the store.
    async fn insert(&self, stock: &StockInput) -> Result<i64, AppError>;

    /// Fails with [`AppError::NotFound`] when no row has this id.
    async fn fetch_one(&self, id: i64) -> Result<Stock, AppError>;

    /// Returns every record in store order.
    async fn fetch_all(&self) -> Result<Vec<Stock>, AppError>;

    /// Overwrites name, price and company. Returns rows affected.
    async fn update(&self, id: i64, stock: &StockInput) -> Result<u64, AppError>;

    /// Returns rows affected.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
