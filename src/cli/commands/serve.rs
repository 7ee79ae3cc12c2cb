use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, FmpConfig};
use crate::router::create_router;

pub async fn serve(
    bind_address: &str,
    fmp_api_key: Option<String>,
    fmp_base_url: String,
) -> Result<()> {
    trace!("Entering serve function");
    info!("SectorPulse application starting up");
    debug!("Bind address: {}", bind_address);
    debug!("FMP base URL: {}", fmp_base_url);

    // Resolve upstream configuration up front; a missing API key fails here.
    let fmp = match FmpConfig::resolve(fmp_api_key, fmp_base_url) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    let state = initialize_app_state(fmp);
    debug!("Application state initialized successfully");

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("SectorPulse API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
