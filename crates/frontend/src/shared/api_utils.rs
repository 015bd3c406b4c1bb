//! API utilities for frontend-backend communication.

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, using
/// port 8000 for the menu engineering API. Returns an empty string when
/// no window is available (non-browser test runs).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/ingredients?page=2");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
