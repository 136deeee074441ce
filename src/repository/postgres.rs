use axum::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use super::StockRepository;
use crate::{
    error::AppError,
    models::{Stock, StockInput},
};

pub struct PgStockRepository {
    pool: PgPool,
}

impl PgStockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockRepository for PgStockRepository {
    #[instrument(skip_all)]
    async fn insert(&self, stock: &StockInput) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stocksid::BIGINT",
        )
        .bind(&stock.name)
        .bind(stock.price)
        .bind(&stock.company)
        .fetch_one(&self.pool)
        .await?;

        info!(id, "inserted stock");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn fetch_one(&self, id: i64) -> Result<Stock, AppError> {
        sqlx::query_as::<_, Stock>(
            "SELECT stocksid::BIGINT AS stockid, name, price, company FROM stocks WHERE stocksid = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)
    }

    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<Stock>, AppError> {
        let stocks = sqlx::query_as::<_, Stock>(
            "SELECT stocksid::BIGINT AS stockid, name, price, company FROM stocks",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stocks)
    }

    #[instrument(skip(self, stock))]
    async fn update(&self, id: i64, stock: &StockInput) -> Result<u64, AppError> {
        let rows = sqlx::query(
            "UPDATE stocks SET name = $2, price = $3, company = $4 WHERE stocksid = $1",
        )
        .bind(id)
        .bind(&stock.name)
        .bind(stock.price)
        .bind(&stock.company)
        .execute(&self.pool)
        .await?
        .rows_affected();

        info!(rows, "updated stock");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let rows = sqlx::query("DELETE FROM stocks WHERE stocksid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        info!(rows, "deleted stock");
        Ok(rows)
    }
}
