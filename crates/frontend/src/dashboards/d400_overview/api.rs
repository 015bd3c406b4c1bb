use crate::shared::api_utils::api_url;
use contracts::analytics::{BreakevenResponse, PerishableAlert};
use gloo_net::http::Request;

/// Break-even progress for `date`, against the given daily fixed cost.
pub async fn get_breakeven(date: &str, fixed_cost: f64) -> Result<BreakevenResponse, String> {
    let url = api_url(&format!(
        "/api/analytics/breakeven?date={}&fixed_cost={}",
        date, fixed_cost
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

/// Perishable stock expiring within the next `hours` hours.
pub async fn get_perishable_alerts(hours: u32) -> Result<Vec<PerishableAlert>, String> {
    let url = api_url(&format!("/api/analytics/perishables-alerts?hours={}", hours));

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
