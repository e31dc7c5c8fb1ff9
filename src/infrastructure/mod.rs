//! Infrastructure layer for external integrations.
//!
//! Implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`graphql`] - GraphQL client and the statistics gateway built on it

pub mod graphql;
