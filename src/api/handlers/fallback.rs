//! Handler for requests that match no API route.

use axum::extract::OriginalUri;
use axum::http::Method;
use serde_json::json;

use crate::error::AppError;

/// Returns a JSON `404` instead of axum's empty default body.
///
/// # Response
///
/// ```json
/// { "error": { "code": "not_found", "message": "No endpoint at GET /api/vins", "details": { "method": "GET", "path": "/api/vins" } } }
/// ```
pub async fn fallback_handler(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    let path = uri.path();

    AppError::not_found(
        format!("No endpoint at {} {}", method, path),
        json!({ "method": method.as_str(), "path": path }),
    )
}
