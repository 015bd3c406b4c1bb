use crate::shared::api_utils::api_url;
use contracts::analytics::PriceTrendPoint;
use gloo_net::http::Request;

/// Raw validity windows for one ingredient, all suppliers.
pub async fn get_price_trends(ingredient_id: i64) -> Result<Vec<PriceTrendPoint>, String> {
    let url = api_url(&format!(
        "/api/analytics/price-trends?ingredient_id={}",
        ingredient_id
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
