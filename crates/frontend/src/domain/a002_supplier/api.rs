use crate::shared::api_utils::api_url;
use contracts::domain::a002_supplier::{Supplier, SupplierDto};
use gloo_net::http::Request;

/// The suppliers endpoint is not paginated: the whole list comes back
/// at once (it also feeds the price form's dropdown).
pub async fn list() -> Result<Vec<Supplier>, String> {
    let url = api_url("/api/suppliers");

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

pub async fn create(dto: &SupplierDto) -> Result<(), String> {
    let url = api_url("/api/suppliers");

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

pub async fn update(dto: &SupplierDto) -> Result<(), String> {
    let id = dto.id.ok_or_else(|| "Missing supplier id".to_string())?;
    let url = api_url(&format!("/api/suppliers/{}", id));

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
    let url = api_url(&format!("/api/suppliers/{}", id));

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}
