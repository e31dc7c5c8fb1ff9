//! Application error type and its HTML error page response.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::infrastructure::graphql::GraphqlError;
use crate::web::views::ErrorPage;

/// Errors surfaced by the statistics page.
///
/// Every variant renders as the generic error page; `details` are logged
/// but never shown to the browser.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Upstream { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Upstream { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl From<GraphqlError> for AppError {
    fn from(e: GraphqlError) -> Self {
        AppError::upstream(
            "Statistics service is unavailable",
            json!({ "cause": e.to_string() }),
        )
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::internal("Failed to render page", json!({ "cause": e.to_string() }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code(), details = %self.details(), "{}", self);
        } else {
            tracing::debug!(code = self.code(), details = %self.details(), "{}", self);
        }

        let page = ErrorPage::new(status, self.code(), self.to_string());

        match page.render_html() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (status, self.to_string()).into_response()
            }
        }
    }
}
