mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::FakeGateway;
use hubbit_stats::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _gateway) = common::create_test_state(FakeGateway {
        healthy: true,
        ..Default::default()
    });
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["graphql"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let (state, _gateway) = common::create_test_state(FakeGateway {
        healthy: false,
        ..Default::default()
    });
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["graphql"]["status"], "error");
}
