use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppError,
    extract::{JsonBody, StockId},
    models::{MessageResponse, Stock, StockInput},
    state::AppState,
};

pub async fn create_stock(
    State(state): State<AppState>,
    JsonBody(stock): JsonBody<StockInput>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let id = state.stocks.insert(&stock).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(id, "Stock created successfully")),
    ))
}

pub async fn get_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
) -> Result<Json<Stock>, AppError> {
    let stock = state.stocks.fetch_one(id).await?;
    Ok(Json(stock))
}

pub async fn get_all_stock(State(state): State<AppState>) -> Result<Json<Vec<Stock>>, AppError> {
    let stocks = state.stocks.fetch_all().await?;
    Ok(Json(stocks))
}

pub async fn update_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
    JsonBody(stock): JsonBody<StockInput>,
) -> Result<Json<MessageResponse>, AppError> {
    let rows = state.stocks.update(id, &stock).await?;

    Ok(Json(MessageResponse::new(
        id,
        format!("Update successful: {rows} rows affected"),
    )))
}

pub async fn delete_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
) -> Result<Json<MessageResponse>, AppError> {
    let rows = state.stocks.delete(id).await?;

    Ok(Json(MessageResponse::new(
        id,
        format!("Deletion successful: {rows} rows affected"),
    )))
}
