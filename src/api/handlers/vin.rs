//! Handlers for single-VIN lookup and validation.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::vin::{LookupQuery, LookupResponse, ValidateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Decodes a single VIN.
///
/// # Endpoint
///
/// `GET /api/vin/{vin}?reference_year=2026`
///
/// # Response
///
/// ```json
/// {
///   "vin": "WVWZZZ1JZXW000001",
///   "status": "decoded",
///   "record": { "manufacturer": "Volkswagen", "production_year": 1999, "...": "..." }
/// }
/// ```
///
/// A VIN with an unknown manufacturer returns `200` with `"status": "not_found"`
/// and `"record": null`.
///
/// # Errors
///
/// Returns 400 Bad Request if the VIN is malformed or `reference_year` is out of range.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path(vin): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<LookupResponse>, AppError> {
    query.validate()?;

    let record = state.vin_service.lookup(&vin, query.reference_year).await?;

    Ok(Json(LookupResponse::new(vin, record)))
}

/// Checks the structure of a VIN without decoding it.
///
/// # Endpoint
///
/// `GET /api/vin/{vin}/validate`
///
/// # Response
///
/// ```json
/// { "vin": "WVWZZZ1JZXW000001", "valid": true, "formatted": "WVW-ZZZ1JZ-XW000001" }
/// ```
///
/// Always returns 200; invalid input yields `"valid": false`.
pub async fn validate_handler(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Json<ValidateResponse> {
    let valid = state.vin_service.validate(&vin);
    let formatted = state.vin_service.format(&vin);

    Json(ValidateResponse {
        vin,
        valid,
        formatted,
    })
}
