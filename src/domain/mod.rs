//! Domain layer containing the page's data model and gateway contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Identifiers, statistics, and page data
//! - [`gateways`] - Trait definitions for the upstream statistics API
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Page flow lives in services (see [`crate::application::services`])

pub mod entities;
pub mod gateways;
