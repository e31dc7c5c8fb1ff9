//! Minimal GraphQL-over-HTTP client.

use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};
use url::Url;

use super::error::{GraphqlError, GraphqlResult};
use super::queries::Operation;
use crate::domain::entities::ViewerCredentials;

/// Request body as defined by the GraphQL-over-HTTP convention.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    operation_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a V>,
}

/// Response envelope. `data` and `errors` may both be present.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlErrorEntry>>,
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

/// Client for a single GraphQL endpoint.
///
/// Each request carries the viewer's `Cookie` and `Authorization` headers.
/// Transient failures (see [`GraphqlError::is_transient`]) are retried with
/// jittered exponential backoff.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: Url,
    max_retries: usize,
}

impl GraphqlClient {
    /// Creates a client with a per-request `timeout` and up to
    /// `max_retries` extra attempts.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Duration, max_retries: usize) -> GraphqlResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            max_retries,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Executes `operation` and returns its `data`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(data))` when the response carried data
    /// - `Ok(None)` when it carried none (typically with GraphQL `errors`,
    ///   which are logged)
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] when the endpoint is unreachable, answers with
    /// a non-GraphQL error status, or the body does not match `T`.
    pub async fn query<V, T>(
        &self,
        operation: &Operation,
        variables: Option<&V>,
        credentials: &ViewerCredentials,
    ) -> GraphqlResult<Option<T>>
    where
        V: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = GraphqlRequest {
            query: operation.document,
            operation_name: operation.name,
            variables,
        };

        let strategy = ExponentialBackoff::from_millis(10)
            .factor(5)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(self.max_retries);

        let response: GraphqlResponse<T> = RetryIf::spawn(
            strategy,
            || self.send::<V, T>(operation, &body, credentials),
            GraphqlError::is_transient,
        )
        .await?;

        if let Some(errors) = response.errors.as_deref().filter(|e| !e.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            warn!(
                operation = operation.name,
                has_data = response.data.is_some(),
                "GraphQL errors: {}",
                messages.join("; ")
            );
        }

        Ok(response.data)
    }

    async fn send<V, T>(
        &self,
        operation: &Operation,
        body: &GraphqlRequest<'_, V>,
        credentials: &ViewerCredentials,
    ) -> GraphqlResult<GraphqlResponse<T>>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self.http.post(self.endpoint.clone()).json(body);

        if let Some(cookie) = &credentials.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        if let Some(authorization) = &credentials.authorization {
            request = request.header(header::AUTHORIZATION, authorization);
        }

        let response = request.send().await.inspect_err(|e| {
            debug!(operation = operation.name, "GraphQL request failed: {}", e);
        })?;

        let status = response.status();
        if status.is_server_error() {
            debug!(operation = operation.name, %status, "GraphQL endpoint error");
            return Err(GraphqlError::Status(status));
        }

        let bytes = response.bytes().await?;

        match serde_json::from_slice::<GraphqlResponse<T>>(&bytes) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(GraphqlError::Status(status)),
            Err(e) => Err(GraphqlError::Decode(e)),
        }
    }
}
