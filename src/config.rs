use thiserror::Error;

use crate::fmp::FmpClient;
use crate::schemas::AppState;

/// Configuration errors surfaced at startup, before any request is served.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No API key was provided on the command line or via FMP_API_KEY.
    #[error("missing FMP API key: pass --fmp-api-key or set FMP_API_KEY")]
    MissingApiKey,
}

/// Upstream connection settings, resolved once at startup and injected into
/// the client. Handlers never consult the process environment.
#[derive(Clone, Debug)]
pub struct FmpConfig {
    pub api_key: String,
    pub base_url: String,
}

impl FmpConfig {
    /// Resolve the upstream configuration from an optional CLI-provided key
    /// with the environment as fallback. An absent or empty key is a typed
    /// failure here rather than a malformed URL at fetch time.
    pub fn resolve(api_key: Option<String>, base_url: String) -> Result<Self, ConfigError> {
        let api_key = api_key
            .or_else(|| std::env::var("FMP_API_KEY").ok())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self { api_key, base_url })
    }
}

/// Initialize application state from resolved configuration
pub fn initialize_app_state(fmp: FmpConfig) -> AppState {
    tracing::info!(base_url = %fmp.base_url, "Initializing FMP client");
    AppState {
        fmp: FmpClient::new(fmp),
    }
}
