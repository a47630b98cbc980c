//! API utilities for frontend-backend communication
//!
//! Provides helper functions for locating the backend.

/// Get the base URL for API requests
///
/// The backend serves the same origin as the front-end unless the
/// `MARKET_API_BASE` variable was set at compile time.
///
/// # Returns
/// - API base URL like "http://localhost:8000" (no trailing slash)
/// - Empty string if window is not available, which makes every path relative
pub fn api_base() -> String {
    if let Some(base) = option_env!("MARKET_API_BASE") {
        return normalize_base(base);
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window
        .location()
        .origin()
        .map(|origin| normalize_base(&origin))
        .unwrap_or_default()
}

/// Strip trailing slashes so paths can be appended as-is
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base(" https://api.example.com//"), "https://api.example.com");
        assert_eq!(normalize_base(""), "");
    }
}
