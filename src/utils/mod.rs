//! Helper functions for request handling.
//!
//! - [`forwarded_credentials`] - Viewer credential extraction from HTTP headers

pub mod forwarded_credentials;
