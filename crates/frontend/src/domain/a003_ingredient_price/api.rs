use crate::shared::api_utils::api_url;
use contracts::domain::a003_ingredient_price::{IngredientPrice, IngredientPriceDto};
use contracts::shared::Paginated;
use gloo_net::http::Request;

pub async fn list(page: u32) -> Result<Paginated<IngredientPrice>, String> {
    let url = api_url(&format!("/api/ingredient-prices?page={}", page));

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

pub async fn create(dto: &IngredientPriceDto) -> Result<(), String> {
    let url = api_url("/api/ingredient-prices");

    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| format!("Failed to encode payload: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

pub async fn update(dto: &IngredientPriceDto) -> Result<(), String> {
    let id = dto.id.ok_or_else(|| "Missing price id".to_string())?;
    let url = api_url(&format!("/api/ingredient-prices/{}", id));

    let response = Request::put(&url)
        .json(dto)
        .map_err(|e| format!("Failed to encode payload: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), String> {
    let url = api_url(&format!("/api/ingredient-prices/{}", id));

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}
