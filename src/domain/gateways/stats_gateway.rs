//! Gateway trait for the external statistics API.

use crate::domain::entities::{Cid, PageData, ViewerCredentials};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to user identity and session statistics.
///
/// The page never owns this data; every call goes to the upstream API with
/// the viewer's credentials attached.
///
/// # Implementations
///
/// - [`crate::infrastructure::graphql::GraphqlStatsGateway`] - GraphQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/graphql_gateway.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsGateway: Send + Sync {
    /// Resolves the identifier of the requesting user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(cid))` if the upstream knows who the viewer is
    /// - `Ok(None)` if it returned no data (anonymous viewer, GraphQL errors)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failures or when the
    /// resolved identifier is not a valid [`Cid`].
    async fn me_cid(&self, credentials: &ViewerCredentials) -> Result<Option<Cid>, AppError>;

    /// Fetches the viewer and the statistics of `cid`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(data))` when both the viewer and the user were returned
    /// - `Ok(None)` when the upstream returned no usable data
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failures.
    async fn user_stats(
        &self,
        cid: &Cid,
        credentials: &ViewerCredentials,
    ) -> Result<Option<PageData>, AppError>;

    /// Checks whether the upstream API answers queries.
    async fn health_check(&self) -> bool;
}
