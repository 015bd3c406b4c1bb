use crate::shared::api_utils::api_url;
use contracts::analytics::{MenuMatrixCategoriesResponse, MenuMatrixResponse};
use gloo_net::http::Request;

/// Popularity × profitability matrix for dishes sold in [start, end].
pub async fn get_menu_matrix(start: &str, end: &str) -> Result<MenuMatrixResponse, String> {
    let url = api_url(&format!(
        "/api/analytics/menu-matrix?start={}&end={}",
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

/// Quadrants keyed "1".."4", each with the dishes classified into it
/// over [start, end].
pub async fn get_matrix_categories(
    start: &str,
    end: &str,
) -> Result<MenuMatrixCategoriesResponse, String> {
    let url = api_url(&format!(
        "/api/analytics/menu-matrix-by-category?start={}&end={}",
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
