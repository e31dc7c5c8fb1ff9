//! Generic error page.

use askama::Template;
use axum::http::StatusCode;

/// Template for error responses, rendered from `templates/error.html`.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub reason: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl ErrorPage {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            code,
            message: message.into(),
        }
    }

    pub fn render_html(&self) -> askama::Result<String> {
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_page_shows_status_and_message() {
        let html = ErrorPage::new(StatusCode::BAD_GATEWAY, "upstream_error", "Service down")
            .render_html()
            .unwrap();

        assert!(html.contains("502 Bad Gateway"));
        assert!(html.contains("Service down"));
        assert!(html.contains("upstream_error"));
    }
}
