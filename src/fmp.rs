//! Client for the Financial Modeling Prep sector-performance feed.
//!
//! The single upstream integration in the codebase: both the proxy handler
//! and (through it) the frontend view consume sector data via this client.

use std::fmt;
use std::time::Duration;

use common::SectorPerformance;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::FmpConfig;

/// Default FMP API root. Overridable for tests and self-hosted mirrors.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

const SECTOR_PERFORMANCE_PATH: &str = "/sector-performance";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from one upstream fetch.
#[derive(Error, Debug)]
pub enum FmpError {
    /// The request never completed: DNS failure, refused connection,
    /// or client-side timeout.
    #[error("{0}")]
    Unavailable(#[source] reqwest::Error),

    /// Upstream completed the exchange but answered with a non-2xx status.
    /// The status is relayed to the caller; the message is fixed.
    #[error("Failed to fetch from FMP")]
    Rejected {
        /// Status code returned by FMP
        status: StatusCode,
    },

    /// Upstream answered 2xx but the body did not decode as a sector array.
    #[error("malformed sector payload: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// Upstream FMP client.
///
/// Holds the injected API key; nothing here reads the process environment.
#[derive(Clone)]
pub struct FmpClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for FmpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Handlers are #[instrument]ed over AppState; keep the key out of spans.
        f.debug_struct("FmpClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl FmpClient {
    pub fn new(config: FmpConfig) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    /// Fetch the current per-sector percentage changes.
    ///
    /// One attempt, no retry. The outbound request opts out of HTTP caching
    /// so every call reflects the current upstream state. An empty array is
    /// a successful fetch; whether that counts as an error is the caller's
    /// policy.
    pub async fn fetch_sector_performance(&self) -> Result<Vec<SectorPerformance>, FmpError> {
        let url = format!(
            "{}{}?apikey={}",
            self.base_url, SECTOR_PERFORMANCE_PATH, self.api_key
        );
        debug!("fetching sector performance from upstream");

        let response = self
            .http
            .get(&url)
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(FmpError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "upstream rejected sector performance request");
            return Err(FmpError::Rejected { status });
        }

        let records: Vec<SectorPerformance> =
            response.json().await.map_err(FmpError::Malformed)?;
        debug!(records = records.len(), "fetched sector performance");
        Ok(records)
    }
}
