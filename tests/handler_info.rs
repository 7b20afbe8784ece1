mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::code_info_handler;

fn test_server(state: shortlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/v1/urls/{code}/info", get(code_info_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_info_returns_details_for_known_code() {
    let state = common::default_test_state();
    let code = state.registry.shorten("https://example.com/page").unwrap();
    let server = test_server(state);

    let response = server.get(&format!("/api/v1/urls/{code}/info")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalUrl"], "https://example.com/page");
    assert_eq!(json["code"], code.as_str());
    assert_eq!(
        json["shortUrl"],
        format!("https://{}/{}", common::TEST_HOST, code)
    );
}

#[tokio::test]
async fn test_info_unknown_code_is_not_found() {
    let server = test_server(common::default_test_state());

    let response = server.get("/api/v1/urls/zzzzzz/info").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_info_evicted_code_is_not_found() {
    let state = common::create_test_state(1, 6);
    let evicted = state.registry.shorten("https://example.com/old").unwrap();
    state.registry.shorten("https://example.com/new").unwrap();
    let server = test_server(state);

    let response = server.get(&format!("/api/v1/urls/{evicted}/info")).await;

    response.assert_status_not_found();
}
