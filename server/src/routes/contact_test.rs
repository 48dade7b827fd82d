use std::net::Ipv4Addr;

use axum::http::HeaderValue;

use super::*;
use crate::state::test_helpers::{MockRelay, test_app_state, test_app_state_with_limit, test_app_state_with_relay};

fn peer(last: u8) -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from(([198, 51, 100, last], 40_000)))
}

fn ada() -> Json<ContactMessage> {
    Json(ContactMessage {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
    })
}

async fn post(state: &AppState, from: u8, body: Json<ContactMessage>) -> Result<String, (StatusCode, String)> {
    send_contact(State(state.clone()), peer(from), HeaderMap::new(), body).await
}

#[tokio::test]
async fn relays_message_and_echoes_ok() {
    let relay = MockRelay::answering("OK");
    let state = test_app_state_with_relay(relay.clone());

    let result = post(&state, 1, ada()).await;

    assert_eq!(result, Ok("OK".to_owned()));
    let sent = relay.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Ada");
    assert_eq!(sent[0].email, "ada@example.com");
    assert_eq!(sent[0].message, "Hello");
}

#[tokio::test]
async fn unexpected_relay_text_is_passed_through() {
    let state = test_app_state_with_relay(MockRelay::answering("Queued"));
    assert_eq!(post(&state, 1, ada()).await, Ok("Queued".to_owned()));
}

#[tokio::test]
async fn missing_relay_is_service_unavailable() {
    let state = test_app_state();
    let (status, body) = post(&state, 1, ada()).await.unwrap_err();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, RELAY_UNAVAILABLE);
}

#[tokio::test]
async fn blank_field_is_unprocessable_and_not_relayed() {
    let relay = MockRelay::answering("OK");
    let state = test_app_state_with_relay(relay.clone());
    let mut body = ada();
    body.email = "   ".to_owned();

    let (status, text) = post(&state, 1, body).await.unwrap_err();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(text, "email is required");
    assert_eq!(relay.calls(), 0);
}

#[tokio::test]
async fn relay_rejection_is_bad_gateway_without_leaking_body() {
    let state = test_app_state_with_relay(MockRelay::rejecting(400, "The Public Key is invalid"));
    let (status, body) = post(&state, 1, ada()).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, RELAY_FAILED);
}

#[tokio::test]
async fn relay_timeout_is_bad_gateway() {
    let state = test_app_state_with_relay(MockRelay::timing_out());
    let (status, _) = post(&state, 1, ada()).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn per_client_limit_returns_too_many_requests() {
    let relay = MockRelay::answering("OK");
    let state = test_app_state_with_limit(relay.clone(), 2);

    assert!(post(&state, 1, ada()).await.is_ok());
    assert!(post(&state, 1, ada()).await.is_ok());
    let (status, _) = post(&state, 1, ada()).await.unwrap_err();

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(relay.calls(), 2);
    assert!(post(&state, 2, ada()).await.is_ok());
}

#[test]
fn client_ip_ignores_forwarded_header_unless_trusted() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
    let peer = SocketAddr::from(([10, 0, 0, 1], 8080));

    assert_eq!(client_ip(&headers, peer, false), IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
    assert_eq!(client_ip(&headers, peer, true), IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)));
}

#[test]
fn client_ip_falls_back_to_peer_on_garbage_header() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static("unknown"));
    let peer = SocketAddr::from(([10, 0, 0, 2], 8080));
    assert_eq!(client_ip(&headers, peer, true), peer.ip());
}

#[tokio::test]
async fn rejected_fields_do_not_spend_rate_limit_quota() {
    let relay = MockRelay::answering("OK");
    let state = test_app_state_with_limit(relay.clone(), 2);
    let mut bad = ada();
    bad.email = "ada@".to_owned();

    for _ in 0..3 {
        let (status, _) = post(&state, 1, Json(bad.0.clone())).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    assert_eq!(post(&state, 1, ada()).await, Ok("OK".to_owned()));
    assert_eq!(relay.calls(), 1);
}

#[tokio::test]
async fn dotless_domain_address_is_relayed() {
    let relay = MockRelay::answering("OK");
    let state = test_app_state_with_relay(relay.clone());
    let mut body = ada();
    body.email = "ada@localhost".to_owned();

    assert_eq!(post(&state, 1, body).await, Ok("OK".to_owned()));
    assert_eq!(relay.sent.lock().unwrap()[0].email, "ada@localhost");
}
