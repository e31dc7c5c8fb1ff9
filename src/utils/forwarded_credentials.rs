//! Viewer credential extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

use crate::domain::entities::ViewerCredentials;

/// Copies the headers the statistics API authenticates with.
///
/// Reads `Cookie` and `Authorization`. Multiple `Cookie` headers (allowed
/// over HTTP/2) are joined with `"; "`. Values that are not valid visible
/// ASCII are dropped rather than forwarded.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::COOKIE, "session=abc".parse().unwrap());
///
/// let credentials = credentials_from_headers(&headers);
/// assert_eq!(credentials.cookie.as_deref(), Some("session=abc"));
/// ```
pub fn credentials_from_headers(headers: &HeaderMap) -> ViewerCredentials {
    let cookies: Vec<&str> = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .collect();

    let cookie = (!cookies.is_empty()).then(|| cookies.join("; "));

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    ViewerCredentials::new(cookie, authorization)
}
