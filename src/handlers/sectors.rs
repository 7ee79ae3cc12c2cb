use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use common::SectorPerformance;
use tracing::{error, instrument};

use crate::fmp::FmpError;
use crate::schemas::{AppState, ErrorResponse};

/// Revalidation interval advised to downstream caches on success. The
/// outbound upstream fetch itself is never cached (see `FmpClient`).
const CACHE_CONTROL_VALUE: &str = "public, max-age=3600";

/// Proxy the current sector performance figures from FMP
///
/// Relays the upstream JSON array unchanged on success. Upstream rejections
/// keep their status code with a fixed message; transport and decode
/// failures become 500s carrying the underlying message. Stateless, one
/// upstream attempt per call, no retry.
#[utoipa::path(
    get,
    path = "/api/v1/sectors",
    tag = "sectors",
    responses(
        (status = 200, description = "Current sector percentage changes, relayed unchanged from FMP", body = Vec<SectorPerformance>),
        (status = 500, description = "Upstream unreachable or returned an unreadable payload", body = ErrorResponse),
        (status = "default", description = "Upstream rejected the request; its status code is relayed as-is", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_sector_performance(State(state): State<AppState>) -> Response {
    match state.fmp.fetch_sector_performance().await {
        Ok(records) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)],
            Json(records),
        )
            .into_response(),
        Err(err) => {
            let status = match err {
                FmpError::Rejected { status } => status,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error!(error = %err, %status, "sector performance fetch failed");
            (status, Json(ErrorResponse::new(err.to_string()))).into_response()
        }
    }
}
