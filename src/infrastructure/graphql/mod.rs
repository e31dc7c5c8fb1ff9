//! GraphQL access to the upstream statistics API.
//!
//! - [`client::GraphqlClient`] - HTTP transport with retry and credential forwarding
//! - [`queries`] - Operation documents and response shapes
//! - [`gateway::GraphqlStatsGateway`] - [`crate::domain::gateways::StatsGateway`] implementation

pub mod client;
pub mod error;
pub mod gateway;
pub mod queries;

pub use client::GraphqlClient;
pub use error::{GraphqlError, GraphqlResult};
pub use gateway::GraphqlStatsGateway;
