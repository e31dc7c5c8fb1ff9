//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::StatsPageService;
use crate::domain::gateways::StatsGateway;

/// Application state shared across all handlers.
///
/// Cloned per request; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<StatsPageService>,
}

impl AppState {
    /// Builds the state around a statistics gateway.
    pub fn new(gateway: Arc<dyn StatsGateway>) -> Self {
        Self {
            page_service: Arc::new(StatsPageService::new(gateway)),
        }
    }
}
