//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::stats_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /stats/{cid}` - Session statistics for a user (`me` = requesting user)
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/stats/{cid}", get(stats_handler))
}
