mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::health_handler;

#[tokio::test]
async fn test_health_reports_healthy() {
    let state = common::default_test_state();
    state.registry.shorten("https://example.com").unwrap();

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["registry"]["status"], "ok");
    assert_eq!(json["checks"]["registry"]["message"], "1 of 10000 entries");
}
