//! VIN lookup service with optional memoization.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::{debug, warn};

use crate::domain::decoding::VinDecoder;
use crate::domain::entities::VehicleRecord;
use crate::domain::vin::{Vin, format_for_display, validate_structure};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Decodes VINs and memoizes found records in a [`CacheService`].
///
/// Decoding is pure, so the cache only saves work; a failing or disabled
/// cache never changes results. Not-found outcomes are not cached.
pub struct VinService {
    decoder: VinDecoder,
    fixed_reference_year: Option<i32>,
    cache: Arc<dyn CacheService>,
}

impl VinService {
    /// Creates a new VIN service.
    ///
    /// # Arguments
    ///
    /// - `decoder` - decoder whose model catalog is used for every lookup
    /// - `fixed_reference_year` - year used when a request gives none;
    ///   `None` means the current UTC year at request time
    /// - `cache` - memoization backend
    pub fn new(
        decoder: VinDecoder,
        fixed_reference_year: Option<i32>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            decoder,
            fixed_reference_year,
            cache,
        }
    }

    /// Reference year applied when a request does not override it.
    pub fn default_reference_year(&self) -> i32 {
        self.fixed_reference_year.unwrap_or_else(|| Utc::now().year())
    }

    /// Looks up a VIN, consulting the cache first.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` for a decoded VIN
    /// - `Ok(None)` when the manufacturer is unknown
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the VIN is structurally invalid.
    pub async fn lookup(
        &self,
        raw: &str,
        reference_year: Option<i32>,
    ) -> Result<Option<VehicleRecord>, AppError> {
        let vin = Vin::parse(raw)?;
        let year = reference_year.unwrap_or_else(|| self.default_reference_year());
        let key = cache_key(year, &vin);

        match self.cache.get_record(&key).await {
            Ok(Some(record)) => return Ok(Some(record)),
            Ok(None) => {}
            Err(e) => warn!("Cache lookup failed for {}: {}", key, e),
        }

        let Some(record) = self.decoder.with_reference_year(year).decode(&vin) else {
            debug!("No manufacturer for VIN {}", vin);
            return Ok(None);
        };

        if let Err(e) = self.cache.set_record(&key, &record, None).await {
            warn!("Cache store failed for {}: {}", key, e);
        }

        Ok(Some(record))
    }

    /// Structural validity of a raw VIN string.
    pub fn validate(&self, raw: &str) -> bool {
        validate_structure(raw)
    }

    /// `WMI-VDS-VIS` display form of a raw VIN string.
    pub fn format(&self, raw: &str) -> String {
        format_for_display(raw)
    }
}

/// Cache key for a VIN decoded against a reference year.
pub fn cache_key(reference_year: i32, vin: &Vin) -> String {
    format!("{}:{}", reference_year, vin)
}
