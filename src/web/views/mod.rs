//! Askama views for the statistics page and error responses.

pub mod error_page;
pub mod stats_page;
pub mod user_stats_cards;

pub use error_page::ErrorPage;
pub use stats_page::{StatsPage, StatsTemplate};
pub use user_stats_cards::{HourBar, SessionRow, UserStatsCards};
