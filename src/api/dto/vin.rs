//! DTOs for VIN lookup, validation and batch decoding.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::config::{MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR};
use crate::domain::entities::VehicleRecord;
use crate::error::ErrorInfo;

/// Optional lookup parameters passed in the query string.
///
/// Uses `serde_with` to parse the year from its string form.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LookupQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = MIN_REFERENCE_YEAR, max = MAX_REFERENCE_YEAR))]
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    Decoded,
    NotFound,
}

/// Result of a single VIN lookup.
///
/// An unknown manufacturer is a successful lookup with `status: "not_found"`
/// and a `null` record.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub vin: String,
    pub status: LookupStatus,
    pub record: Option<VehicleRecord>,
}

impl LookupResponse {
    pub fn new(vin: impl Into<String>, record: Option<VehicleRecord>) -> Self {
        let status = if record.is_some() {
            LookupStatus::Decoded
        } else {
            LookupStatus::NotFound
        };

        Self {
            vin: vin.into(),
            status,
            record,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub vin: String,
    pub valid: bool,
    pub formatted: String,
}

/// Request body for batch decoding.
///
/// The upper bound on `vins` comes from configuration and is checked in the handler.
#[derive(Debug, Deserialize, Validate)]
pub struct DecodeBatchRequest {
    #[validate(length(min = 1, message = "At least one VIN is required"))]
    pub vins: Vec<String>,

    #[serde(default)]
    #[validate(range(min = MIN_REFERENCE_YEAR, max = MAX_REFERENCE_YEAR))]
    pub reference_year: Option<i32>,
}

/// Per-VIN outcome in a batch response.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DecodeResultItem {
    Lookup(LookupResponse),
    Error { vin: String, error: ErrorInfo },
}

/// Summary statistics for batch processing.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub decoded: usize,
    pub not_found: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
pub struct DecodeBatchResponse {
    pub summary: BatchSummary,
    pub items: Vec<DecodeResultItem>,
}
