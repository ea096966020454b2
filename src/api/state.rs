//! Application state shared across handlers

use std::sync::Arc;

use crate::domain::PricePredictor;
use crate::infrastructure::page::IndexPage;

/// Read-only state built once at startup
#[derive(Clone, Debug)]
pub struct AppState {
    pub predictor: Arc<PricePredictor>,
    pub index_page: Arc<IndexPage>,
    pub brands: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(predictor: PricePredictor, index_page: IndexPage, brands: Vec<String>) -> Self {
        Self {
            predictor: Arc::new(predictor),
            index_page: Arc::new(index_page),
            brands: Arc::new(brands),
        }
    }
}
