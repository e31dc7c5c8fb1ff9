//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Statistics API reachable
/// - **503 Service Unavailable**: Statistics API not answering
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "graphql": {
///       "status": "ok",
///       "message": "GraphQL endpoint reachable"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let graphql_check = check_graphql(&state).await;

    let all_healthy = graphql_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            graphql: graphql_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the statistics API with a trivial query.
async fn check_graphql(state: &AppState) -> CheckStatus {
    if state.page_service.upstream_healthy().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("GraphQL endpoint reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("GraphQL endpoint unreachable".to_string()),
        }
    }
}
