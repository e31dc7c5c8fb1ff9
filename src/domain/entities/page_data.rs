//! Data handed from the page controller to the view.

use serde::{Deserialize, Serialize};

use super::user_stats::UserStats;
use super::viewer::Viewer;

/// Everything the statistics page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    pub me: Viewer,
    pub user: UserStats,
}
