//! Web layer for the browser-facing statistics page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`routes`] - Page route configuration
//! - [`views`] - Templates and their view models

pub mod handlers;
pub mod routes;
pub mod views;
