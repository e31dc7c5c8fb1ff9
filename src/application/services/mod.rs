//! Business logic services for the application layer.

pub mod stats_page_service;

pub use stats_page_service::{PageOutcome, RedirectTarget, StatsPageService};
