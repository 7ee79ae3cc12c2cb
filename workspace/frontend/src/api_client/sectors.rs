use common::SectorPerformance;
use gloo_net::http::Request;

use crate::api_client::api_base;

/// Message shown when the proxy answers non-2xx. The status code is
/// deliberately not part of it; the view renders this text as-is.
const REJECTION_MESSAGE: &str = "Failed to fetch sector performance";

/// Fetch the sector list from the backend proxy.
///
/// One request per call, no retry. The response carries the backend's
/// revalidation hint, so the browser cache decides whether a remount
/// actually hits the network.
pub async fn get_sector_performance() -> Result<Vec<SectorPerformance>, String> {
    let url = format!("{}/sectors", api_base());
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET /sectors - {}", error_msg);
        error_msg
    })?;

    if !response.ok() {
        log::error!("GET /sectors - HTTP error: {}", response.status());
        return Err(REJECTION_MESSAGE.to_string());
    }

    let records: Vec<SectorPerformance> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET /sectors - {}", error_msg);
        error_msg
    })?;

    log::info!("GET /sectors - fetched {} sectors", records.len());
    Ok(records)
}
