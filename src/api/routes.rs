//! API route configuration.

use crate::api::handlers::{
    decode_batch_handler, fallback_handler, lookup_handler, validate_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// VIN routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /vin/{vin}`          - Decode a single VIN
/// - `GET  /vin/{vin}/validate` - Structural check and display form
/// - `POST /vin/decode`         - Decode a batch of VINs
///
/// Any other path under `/api` gets a JSON `404`.
pub fn vin_routes() -> Router<AppState> {
    Router::new()
        .route("/vin/decode", post(decode_batch_handler))
        .route("/vin/{vin}", get(lookup_handler))
        .route("/vin/{vin}/validate", get(validate_handler))
        .fallback(fallback_handler)
}
