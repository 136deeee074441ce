use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{create_stock, delete_stock, get_all_stock, get_stock, update_stock},
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/stock/", post(create_stock).get(get_all_stock))
        .route(
            "/stock/:id",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
