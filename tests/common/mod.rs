#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use vin_decoder::application::services::VinService;
use vin_decoder::domain::decoding::VinDecoder;
use vin_decoder::domain::entities::VehicleRecord;
use vin_decoder::infrastructure::cache::{CacheResult, CacheService, NullCache};
use vin_decoder::state::AppState;

pub const REFERENCE_YEAR: i32 = 2026;
pub const VW_VIN: &str = "WVWZZZ1JZXW000001";
pub const BMW_VIN: &str = "WBA3A5C51CF256985";
pub const UNKNOWN_WMI_VIN: &str = "ZZZ1234567890ABCD";

pub fn create_test_state() -> AppState {
    create_test_state_with_cache(Arc::new(NullCache))
}

pub fn create_test_state_with_cache(cache: Arc<dyn CacheService>) -> AppState {
    let vin_service = Arc::new(VinService::new(
        VinDecoder::new(REFERENCE_YEAR),
        Some(REFERENCE_YEAR),
        cache.clone(),
    ));

    AppState::new(vin_service, cache, 5)
}

/// Cache whose backend is always unreachable.
pub struct DownCache;

#[async_trait]
impl CacheService for DownCache {
    async fn get_record(&self, _key: &str) -> CacheResult<Option<VehicleRecord>> {
        Ok(None)
    }

    async fn set_record(
        &self,
        _key: &str,
        _record: &VehicleRecord,
        _ttl_seconds: Option<usize>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        false
    }
}
