//! Request extractors that turn malformed input into `400 Bad Request`
//! before any store access.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// The `:id` path segment, parsed as a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockId(pub i64);

impl StockId {
    fn parse(raw: &str) -> Result<Self, AppError> {
        raw.parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(StockId)
            .ok_or_else(|| AppError::InvalidInput("Invalid stock ID".into()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for StockId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidInput("Invalid stock ID".into()))?;

        StockId::parse(&raw)
    }
}

/// A JSON body decoded without requiring a `Content-Type` header.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::InvalidInput("Invalid JSON".into()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|_| AppError::InvalidInput("Invalid JSON".into()))
    }
}
