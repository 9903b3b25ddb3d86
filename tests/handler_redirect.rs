mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;

use wa_redirect::api::handlers::redirect_handler;
use wa_redirect::domain::device::DeviceClass;
use wa_redirect::domain::event::{EventAction, RedirectEvent};
use wa_redirect::state::AppState;

fn app(state: AppState) -> Router {
    Router::new()
        .route("/{phonenum}", get(redirect_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_desktop_redirects_to_web_client() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/15551234567")
        .add_header("User-Agent", common::DESKTOP_UA)
        .await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(
        response.header("location"),
        "https://web.whatsapp.com/send?phone=+15551234567"
    );
}

#[tokio::test]
async fn test_mobile_redirects_to_native_scheme() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/15551234567")
        .add_header("User-Agent", common::MOBILE_UA)
        .await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(
        response.header("location"),
        "whatsapp://send?phone=+15551234567"
    );
}

#[tokio::test]
async fn test_iphone_redirects_to_native_scheme() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/491701234567")
        .add_header("User-Agent", common::IPHONE_UA)
        .await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(
        response.header("location"),
        "whatsapp://send?phone=+491701234567"
    );
}

#[tokio::test]
async fn test_bot_gets_error_body() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/15551234567")
        .add_header("User-Agent", common::BOT_UA)
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json, serde_json::json!({"status": "error"}));
}

#[tokio::test]
async fn test_missing_user_agent_gets_error_body() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/15551234567").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json, serde_json::json!({"status": "error"}));
}

#[tokio::test]
async fn test_redirect_records_event() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/15551234567")
        .add_header("User-Agent", common::DESKTOP_UA)
        .await;

    assert_eq!(response.status_code(), 308);

    let event = rx.try_recv().unwrap();
    assert_eq!(event.action, EventAction::Phone);
    assert_eq!(event.phone, "15551234567");
    assert_eq!(event.device, DeviceClass::Desktop);
    assert_eq!(event.user_agent.as_deref(), Some(common::DESKTOP_UA));
}

#[tokio::test]
async fn test_unclassifiable_client_still_records_event() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/15551234567")
        .add_header("User-Agent", common::BOT_UA)
        .await;

    response.assert_status_bad_request();

    let event = rx.try_recv().unwrap();
    assert_eq!(event.device, DeviceClass::Unknown);
}

#[tokio::test]
async fn test_redirect_survives_closed_event_queue() {
    let (state, rx) = common::create_test_state();
    // Simulates the tracking side channel being gone entirely
    drop(rx);

    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/15551234567")
        .add_header("User-Agent", common::DESKTOP_UA)
        .await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(
        response.header("location"),
        "https://web.whatsapp.com/send?phone=+15551234567"
    );
}

#[tokio::test]
async fn test_redirect_survives_full_event_queue() {
    let (state, _rx) = common::create_test_state_with_capacity(1);

    // Occupy the only slot so the handler's try_send fails
    state
        .event_tx
        .try_send(RedirectEvent::new(
            EventAction::Phone,
            "0".to_string(),
            DeviceClass::Desktop,
            None,
        ))
        .unwrap();

    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/15551234567")
        .add_header("User-Agent", common::MOBILE_UA)
        .await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(
        response.header("location"),
        "whatsapp://send?phone=+15551234567"
    );
}
