use crate::shared::api_utils::api_url;
use contracts::analytics::TrafficFlowEntry;
use gloo_net::http::Request;

/// Revenue grouped by weekday × hour for sales in [start, end].
pub async fn get_traffic_flow(start: &str, end: &str) -> Result<Vec<TrafficFlowEntry>, String> {
    let url = api_url(&format!(
        "/api/analytics/traffic-flow?start={}&end={}",
        start, end
    ));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
