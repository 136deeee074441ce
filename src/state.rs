use std::sync::Arc;

use crate::repository::StockRepository;

#[derive(Clone)]
pub struct AppState {
    pub stocks: Arc<dyn StockRepository>,
}

impl AppState {
    pub fn new(stocks: Arc<dyn StockRepository>) -> Self {
        Self { stocks }
    }
}
