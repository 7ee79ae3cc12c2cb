use common::SectorPerformance;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::fmp::FmpClient;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Upstream FMP client
    pub fmp: FmpClient,
}

/// Error response
///
/// The shape is fixed by the proxy contract: a single `error` field, with
/// the upstream status code (or 500) carried in the HTTP status line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::sectors::get_sector_performance,
    ),
    components(
        schemas(
            SectorPerformance,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sectors", description = "Market sector performance endpoints"),
    ),
    info(
        title = "SectorPulse API",
        description = "Market sector performance proxy - relays sector percentage changes from Financial Modeling Prep",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
