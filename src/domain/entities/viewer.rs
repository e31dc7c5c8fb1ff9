//! The user the page is being rendered for.

use serde::{Deserialize, Serialize};

/// Identity of the requesting user (`me` in the GraphQL schema).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub cid: String,
    pub nick: String,
}
