use axum::{Router, routing::get};
use axum_test::TestServer;

use wa_redirect::api::handlers::root_handler;

#[tokio::test]
async fn test_root_returns_success_body() {
    let app = Router::new().route("/", get(root_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "OK");
}
