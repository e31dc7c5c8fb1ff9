//! # Hubbit Stats
//!
//! Server-rendered session statistics page backed by a GraphQL API, built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a layered layout:
//!
//! - **Domain Layer** ([`domain`]) - Identifiers, statistics entities, and the gateway trait
//! - **Application Layer** ([`application`]) - Page flow (`me` resolution, statistics loading)
//! - **Infrastructure Layer** ([`infrastructure`]) - GraphQL client and gateway
//! - **API Layer** ([`api`]) - Health endpoint and HTTP middleware
//! - **Web Layer** ([`web`]) - Page handler and Askama views
//!
//! ## Request Flow
//!
//! `GET /stats/{cid}` either renders the statistics of `cid`, or, for the
//! reserved `me`, redirects (307) to the requesting user's own page.
//!
//! ## Quick Start
//!
//! ```bash
//! export GRAPHQL_URL="http://localhost:8080/api/graphql"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PageOutcome, RedirectTarget, StatsPageService};
    pub use crate::domain::entities::{
        Cid, PageData, SessionSpan, UserStats, Viewer, ViewerCredentials,
    };
    pub use crate::domain::gateways::StatsGateway;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
