//! Page controller for the session statistics page.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, info, warn};

use crate::domain::entities::{Cid, PageData, ViewerCredentials};
use crate::domain::gateways::StatsGateway;
use crate::error::AppError;

/// Where to send the browser instead of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub destination: String,
    pub permanent: bool,
}

impl RedirectTarget {
    pub fn temporary(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            permanent: false,
        }
    }
}

/// Result of loading the page: either redirect, or render with the fetched data.
///
/// `Render(None)` means the upstream returned nothing usable and the page
/// renders an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Redirect(RedirectTarget),
    Render(Option<PageData>),
}

/// Resolves the route parameter and loads the page data.
///
/// At most two upstream calls happen per request and they are sequential:
/// the identity lookup (only for `"me"`), then the statistics query.
pub struct StatsPageService {
    gateway: Arc<dyn StatsGateway>,
}

impl StatsPageService {
    pub fn new(gateway: Arc<dyn StatsGateway>) -> Self {
        Self { gateway }
    }

    /// Loads the statistics page for the raw path segment `requested`.
    ///
    /// # Flow
    ///
    /// 1. Validate `requested` as a [`Cid`]
    /// 2. If it is `"me"`, ask the upstream who the viewer is; on success
    ///    return a temporary redirect to the viewer's own page
    /// 3. Otherwise (or when the identity lookup returned nothing) query
    ///    the statistics and hand them to the view unmodified
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed identifier.
    /// Returns [`AppError::Upstream`] when the statistics API fails.
    pub async fn load(
        &self,
        requested: &str,
        credentials: &ViewerCredentials,
    ) -> Result<PageOutcome, AppError> {
        let cid = Cid::parse(requested)?;

        if cid.is_me() {
            match self.gateway.me_cid(credentials).await? {
                Some(resolved) if !resolved.is_me() => {
                    let target = RedirectTarget::temporary(resolved.stats_path());
                    info!(cid = %resolved, "Redirecting current user to own stats page");
                    counter!("stats_page_requests_total", "outcome" => "redirect").increment(1);
                    return Ok(PageOutcome::Redirect(target));
                }
                Some(_) => {
                    warn!("Identity lookup resolved to the sentinel itself, not redirecting");
                }
                None => {
                    debug!("Identity lookup returned no data, loading stats for sentinel");
                }
            }
        }

        let data = self.gateway.user_stats(&cid, credentials).await?;

        let outcome = if data.is_some() { "render" } else { "empty" };
        counter!("stats_page_requests_total", "outcome" => outcome).increment(1);

        Ok(PageOutcome::Render(data))
    }

    /// Checks whether the statistics API is reachable.
    pub async fn upstream_healthy(&self) -> bool {
        self.gateway.health_check().await
    }
}
