//! Session statistics page handler.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::services::{PageOutcome, RedirectTarget};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::forwarded_credentials::credentials_from_headers;
use crate::web::views::StatsPage;

/// Renders the statistics page for a user.
///
/// # Endpoint
///
/// `GET /stats/{cid}`
///
/// `{cid}` is a user identifier or `me`, the alias for the requesting user.
///
/// # Request Flow
///
/// 1. Copy the viewer's `Cookie` / `Authorization` headers for the upstream
/// 2. Resolve the page via [`crate::application::services::StatsPageService`]
/// 3. Return `307 Temporary Redirect` to `/stats/{realCid}` for a resolved `me`,
///    otherwise render the page (empty body when there is no data)
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed identifier.
/// Returns 502 Bad Gateway if the statistics API fails.
pub async fn stats_handler(
    Path(cid): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let credentials = credentials_from_headers(&headers);

    let response = match state.page_service.load(&cid, &credentials).await? {
        PageOutcome::Redirect(target) => redirect_to(&target),
        PageOutcome::Render(data) => StatsPage::from_data(data).into_response(),
    };

    Ok(response)
}

fn redirect_to(target: &RedirectTarget) -> Response {
    if target.permanent {
        Redirect::permanent(&target.destination).into_response()
    } else {
        Redirect::temporary(&target.destination).into_response()
    }
}
