//! HTML page handlers.

mod stats;

pub use stats::stats_handler;
