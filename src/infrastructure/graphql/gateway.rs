//! GraphQL implementation of the statistics gateway.

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use super::client::GraphqlClient;
use super::queries::{
    HEALTH_CHECK_QUERY, ME_CID_QUERY, MeCidData, TypenameData, USER_STATS_QUERY, UserStatsData,
    UserStatsVariables,
};
use crate::domain::entities::{Cid, PageData, ViewerCredentials};
use crate::domain::gateways::StatsGateway;
use crate::error::AppError;

/// [`StatsGateway`] backed by the `UserStats` and `MeCidQuery` operations.
pub struct GraphqlStatsGateway {
    client: GraphqlClient,
}

impl GraphqlStatsGateway {
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatsGateway for GraphqlStatsGateway {
    async fn me_cid(&self, credentials: &ViewerCredentials) -> Result<Option<Cid>, AppError> {
        let data: Option<MeCidData> = self
            .client
            .query::<(), _>(&ME_CID_QUERY, None, credentials)
            .await?;

        let Some(me) = data.and_then(|d| d.me) else {
            return Ok(None);
        };

        Cid::parse(&me.cid).map(Some).map_err(|_| {
            AppError::upstream(
                "Identity service returned an invalid cid",
                json!({ "cid": me.cid }),
            )
        })
    }

    async fn user_stats(
        &self,
        cid: &Cid,
        credentials: &ViewerCredentials,
    ) -> Result<Option<PageData>, AppError> {
        let variables = UserStatsVariables::for_cid(cid.as_str());
        let data: Option<UserStatsData> = self
            .client
            .query(&USER_STATS_QUERY, Some(&variables), credentials)
            .await?;

        let Some(data) = data else {
            return Ok(None);
        };

        match (data.me, data.user) {
            (Some(me), Some(user)) => Ok(Some(PageData { me, user })),
            (me, user) => {
                warn!(
                    cid = %cid,
                    has_me = me.is_some(),
                    has_user = user.is_some(),
                    "Incomplete statistics response, rendering empty page"
                );
                Ok(None)
            }
        }
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .query::<(), TypenameData>(&HEALTH_CHECK_QUERY, None, &ViewerCredentials::anonymous())
            .await
        {
            Ok(Some(_)) => true,
            Ok(None) => {
                warn!(endpoint = %self.client.endpoint(), "GraphQL health probe returned no data");
                false
            }
            Err(e) => {
                warn!(endpoint = %self.client.endpoint(), "GraphQL health probe failed: {}", e);
                false
            }
        }
    }
}
