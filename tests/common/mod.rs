#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use hubbit_stats::domain::entities::{
    Cid, PageData, SessionSpan, UserStats, Viewer, ViewerCredentials,
};
use hubbit_stats::domain::gateways::StatsGateway;
use hubbit_stats::error::AppError;
use hubbit_stats::state::AppState;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Gateway call as observed by [`FakeGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    MeCid { cookie: Option<String> },
    UserStats { cid: String, cookie: Option<String> },
}

/// In-memory gateway with canned answers that records every call.
#[derive(Default)]
pub struct FakeGateway {
    pub me: Option<String>,
    pub stats: Option<PageData>,
    pub fail: bool,
    pub healthy: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeGateway {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsGateway for FakeGateway {
    async fn me_cid(&self, credentials: &ViewerCredentials) -> Result<Option<Cid>, AppError> {
        self.calls.lock().unwrap().push(Call::MeCid {
            cookie: credentials.cookie.clone(),
        });

        if self.fail {
            return Err(AppError::upstream("upstream down", json!({})));
        }

        Ok(self.me.as_deref().map(|cid| Cid::parse(cid).unwrap()))
    }

    async fn user_stats(
        &self,
        cid: &Cid,
        credentials: &ViewerCredentials,
    ) -> Result<Option<PageData>, AppError> {
        self.calls.lock().unwrap().push(Call::UserStats {
            cid: cid.to_string(),
            cookie: credentials.cookie.clone(),
        });

        if self.fail {
            return Err(AppError::upstream("upstream down", json!({})));
        }

        Ok(self.stats.clone())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

pub fn create_test_state(gateway: FakeGateway) -> (AppState, Arc<FakeGateway>) {
    let gateway = Arc::new(gateway);
    let state = AppState::new(gateway.clone());
    (state, gateway)
}

pub fn sample_page_data(user_cid: &str, nick: &str) -> PageData {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 1, 11, 15, 0).unwrap();

    PageData {
        me: Viewer {
            cid: "viewer1".to_string(),
            nick: nick.to_string(),
        },
        user: UserStats {
            longest_session: Some(SessionSpan::new(start, end)),
            recent_sessions: vec![SessionSpan::new(start, end)],
            hour_stats: vec![0; 24],
            cid: user_cid.to_string(),
        },
    }
}
