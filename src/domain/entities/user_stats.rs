//! Per-user session statistics.

use serde::{Deserialize, Serialize};

use super::session::SessionSpan;

/// Read-only session statistics for one user.
///
/// `hour_stats` holds one counter per hour of the day, starting at midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub longest_session: Option<SessionSpan>,
    #[serde(default)]
    pub recent_sessions: Vec<SessionSpan>,
    #[serde(default)]
    pub hour_stats: Vec<i64>,
    pub cid: String,
}
