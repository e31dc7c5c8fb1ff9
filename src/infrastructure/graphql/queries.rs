//! GraphQL documents used by the statistics page and their response shapes.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{UserStats, Viewer};

/// A named GraphQL operation.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

/// Viewer identity plus the statistics of one user.
pub const USER_STATS_QUERY: Operation = Operation {
    name: "UserStats",
    document: r#"query UserStats($input: UserUniqueInput!) {
  me {
    cid
    nick
  }
  user(input: $input) {
    longestSession {
      startTime
      endTime
    }
    recentSessions {
      startTime
      endTime
    }
    hourStats
    cid
  }
}"#,
};

/// Identifier of the requesting user.
pub const ME_CID_QUERY: Operation = Operation {
    name: "MeCidQuery",
    document: r#"query MeCidQuery {
  me {
    cid
  }
}"#,
};

/// Cheapest possible query, used to probe the endpoint.
pub const HEALTH_CHECK_QUERY: Operation = Operation {
    name: "HealthCheck",
    document: "query HealthCheck { __typename }",
};

#[derive(Debug, Serialize)]
pub struct UserStatsVariables<'a> {
    pub input: UserUniqueInput<'a>,
}

impl<'a> UserStatsVariables<'a> {
    pub fn for_cid(cid: &'a str) -> Self {
        Self {
            input: UserUniqueInput { cid },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserUniqueInput<'a> {
    pub cid: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct UserStatsData {
    pub me: Option<Viewer>,
    pub user: Option<UserStats>,
}

#[derive(Debug, Deserialize)]
pub struct MeCidData {
    pub me: Option<MeCid>,
}

#[derive(Debug, Deserialize)]
pub struct MeCid {
    pub cid: String,
}

#[derive(Debug, Deserialize)]
pub struct TypenameData {
    #[serde(rename = "__typename")]
    pub typename: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_stats_variables_shape() {
        let value = serde_json::to_value(UserStatsVariables::for_cid("abc123")).unwrap();
        assert_eq!(value, json!({ "input": { "cid": "abc123" } }));
    }

    #[test]
    fn test_user_stats_data_decodes_full_payload() {
        let data: UserStatsData = serde_json::from_value(json!({
            "me": { "cid": "viewer1", "nick": "Viewer" },
            "user": {
                "longestSession": {
                    "startTime": "2024-03-01T08:00:00Z",
                    "endTime": "2024-03-01T12:00:00Z"
                },
                "recentSessions": [
                    { "startTime": "2024-03-02T09:00:00Z", "endTime": "2024-03-02T10:00:00Z" }
                ],
                "hourStats": [0, 1, 2],
                "cid": "abc123"
            }
        }))
        .unwrap();

        let user = data.user.unwrap();
        assert_eq!(data.me.unwrap().nick, "Viewer");
        assert_eq!(user.cid, "abc123");
        assert_eq!(user.recent_sessions.len(), 1);
        assert_eq!(user.hour_stats, vec![0, 1, 2]);
        assert!(user.longest_session.is_some());
    }

    #[test]
    fn test_user_stats_data_tolerates_null_user() {
        let data: UserStatsData =
            serde_json::from_value(json!({ "me": { "cid": "v", "nick": "n" }, "user": null }))
                .unwrap();
        assert!(data.user.is_none());
    }

    #[test]
    fn test_documents_name_their_operations() {
        for op in [USER_STATS_QUERY, ME_CID_QUERY, HEALTH_CHECK_QUERY] {
            assert!(op.document.starts_with(&format!("query {}", op.name)));
        }
    }
}
