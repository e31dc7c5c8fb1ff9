//! Core data structures of the statistics page.

pub mod cid;
pub mod credentials;
pub mod page_data;
pub mod session;
pub mod user_stats;
pub mod viewer;

pub use cid::{Cid, ME_SENTINEL};
pub use credentials::ViewerCredentials;
pub use page_data::PageData;
pub use session::SessionSpan;
pub use user_stats::UserStats;
pub use viewer::Viewer;
