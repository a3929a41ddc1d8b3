//! Handler for batch VIN decoding.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::vin::{
    BatchSummary, DecodeBatchRequest, DecodeBatchResponse, DecodeResultItem, LookupResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Decodes several VINs in one request.
///
/// # Endpoint
///
/// `POST /api/vin/decode`
///
/// # Batch Processing
///
/// Each VIN is handled independently. A malformed VIN is reported in its
/// item and does not fail the batch.
///
/// # Request Body
///
/// ```json
/// { "vins": ["WVWZZZ1JZXW000001", "SHORT123"], "reference_year": 2026 }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "decoded": 1, "not_found": 0, "failed": 1 },
///   "items": [
///     { "vin": "WVWZZZ1JZXW000001", "status": "decoded", "record": { } },
///     { "vin": "SHORT123", "error": { "code": "validation_error", "message": "...", "details": { } } }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the list is empty, longer than the configured
/// maximum, or `reference_year` is out of range.
pub async fn decode_batch_handler(
    State(state): State<AppState>,
    Json(payload): Json<DecodeBatchRequest>,
) -> Result<Json<DecodeBatchResponse>, AppError> {
    payload.validate()?;

    if payload.vins.len() > state.max_batch_size {
        return Err(AppError::bad_request(
            "Too many VINs in batch",
            json!({ "max": state.max_batch_size, "received": payload.vins.len() }),
        ));
    }

    let mut summary = BatchSummary {
        total: payload.vins.len(),
        ..BatchSummary::default()
    };
    let mut items = Vec::with_capacity(summary.total);

    for vin in payload.vins {
        match state
            .vin_service
            .lookup(&vin, payload.reference_year)
            .await
        {
            Ok(Some(record)) => {
                summary.decoded += 1;
                items.push(DecodeResultItem::Lookup(LookupResponse::new(
                    vin,
                    Some(record),
                )));
            }
            Ok(None) => {
                summary.not_found += 1;
                items.push(DecodeResultItem::Lookup(LookupResponse::new(vin, None)));
            }
            Err(err) => {
                summary.failed += 1;
                items.push(DecodeResultItem::Error {
                    vin,
                    error: err.to_error_info(),
                });
            }
        }
    }

    Ok(Json(DecodeBatchResponse { summary, items }))
}
