//! JSON API layer and shared HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - JSON endpoint handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
