//! HTTP server initialization and runtime setup.
//!
//! Builds the GraphQL gateway, wires application state, and runs the Axum
//! server until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::graphql::{GraphqlClient, GraphqlStatsGateway};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the GraphQL-backed statistics gateway from configuration.
///
/// # Errors
///
/// Returns an error if the endpoint URL is invalid or the HTTP client
/// cannot be constructed.
pub fn build_gateway(config: &Config) -> Result<GraphqlStatsGateway> {
    let endpoint = config.graphql_endpoint()?;
    let client = GraphqlClient::new(
        endpoint,
        config.graphql_timeout(),
        config.graphql_max_retries,
    )
    .context("Failed to build GraphQL client")?;

    Ok(GraphqlStatsGateway::new(client))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - GraphQL client and statistics gateway
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// The upstream is probed once at startup; an unreachable upstream is
/// logged but does not prevent the server from starting.
///
/// # Errors
///
/// Returns an error if:
/// - The GraphQL endpoint is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let gateway = Arc::new(build_gateway(&config)?);
    let state = AppState::new(gateway);

    if state.page_service.upstream_healthy().await {
        tracing::info!("GraphQL endpoint reachable");
    } else {
        tracing::warn!("GraphQL endpoint not reachable at startup, serving anyway");
    }

    let app = app_router(state, &config);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
