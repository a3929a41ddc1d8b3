//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::VinService;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub vin_service: Arc<VinService>,
    pub cache: Arc<dyn CacheService>,
    pub max_batch_size: usize,
}

impl AppState {
    pub fn new(
        vin_service: Arc<VinService>,
        cache: Arc<dyn CacheService>,
        max_batch_size: usize,
    ) -> Self {
        Self {
            vin_service,
            cache,
            max_batch_size,
        }
    }
}
