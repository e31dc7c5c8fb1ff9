//! Gateway trait definitions for the domain layer.
//!
//! Gateways abstract the external systems the page reads from. Concrete
//! implementations live in `crate::infrastructure`; mocks are generated via
//! `mockall` for unit tests.
//!
//! # Available Gateways
//!
//! - [`StatsGateway`] - user identity and session statistics

pub mod stats_gateway;

pub use stats_gateway::StatsGateway;

#[cfg(test)]
pub use stats_gateway::MockStatsGateway;
