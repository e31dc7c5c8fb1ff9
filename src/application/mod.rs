//! Application layer services implementing the page flow.
//!
//! Services consume gateway traits from [`crate::domain::gateways`] and give
//! HTTP handlers a small, testable API.
//!
//! # Available Services
//!
//! - [`services::stats_page_service::StatsPageService`] - `"me"` resolution and statistics loading

pub mod services;
