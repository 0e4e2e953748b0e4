//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::config::{BACKEND_PORT, BACKEND_URL};

/// Get the base URL for API requests
///
/// Uses `STORE_BACKEND_URL` when it was set at build time, otherwise
/// constructs the base URL from the current window location on port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://api.tienda.pe"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = BACKEND_URL {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/productos/7/obtener-producto");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Joins a path and an already encoded query string
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Percent-encodes one path segment (ids, DNI numbers)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/pagos/obtener-pagos", ""), "/pagos/obtener-pagos");
        assert_eq!(
            with_query("/pagos/obtener-pagos", "page=2"),
            "/pagos/obtener-pagos?page=2"
        );
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("12345678"), "12345678");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
