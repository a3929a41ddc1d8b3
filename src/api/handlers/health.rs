//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// VIN with a tabulated manufacturer, decoded as a liveness probe.
const PROBE_VIN: &str = "WVWZZZ1JZXW000001";

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Decoder**: Decodes a known VIN
/// 2. **Cache**: Tests Redis PING (always ok when caching is disabled)
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "decoder": { "status": "ok", "message": "Reference year 2026" },
///     "cache": { "status": "ok", "message": "Cache reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let decoder_check = check_decoder(&state).await;
    let cache_check = check_cache(&state).await;

    let all_healthy = decoder_check.is_ok() && cache_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            decoder: decoder_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_decoder(state: &AppState) -> CheckStatus {
    match state.vin_service.lookup(PROBE_VIN, None).await {
        Ok(Some(_)) => CheckStatus::ok(format!(
            "Reference year {}",
            state.vin_service.default_reference_year()
        )),
        Ok(None) => CheckStatus::error("Probe VIN not recognised"),
        Err(e) => CheckStatus::error(format!("Probe decode failed: {}", e)),
    }
}

/// Checks cache connectivity via PING command.
async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus::ok("Cache reachable")
    } else {
        CheckStatus::error("Cache connection failed")
    }
}
