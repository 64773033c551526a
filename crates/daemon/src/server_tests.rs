// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use axum::body::Body;
use axum::http::{Method, Request};
use ct_adapters::FakeNotifier;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn controller_with(notifiers: &[&FakeNotifier]) -> Arc<Controller> {
    let controller = Controller::new();
    for notifier in notifiers {
        controller.add_notifier(Arc::new((*notifier).clone())).await;
    }
    Arc::new(controller)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(controller: &Arc<Controller>, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(Arc::clone(controller))
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn submitted_event_reaches_notifier() {
    let fake = FakeNotifier::new("stdout");
    let controller = controller_with(&[&fake]).await;

    let (status, body) = send(
        &controller,
        post_json("/test", r#"{"EventId": "e2", "EventName": "CreateUser"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"accepted": true}));
    assert_eq!(fake.delivered_ids(), vec!["e2"]);
}

#[tokio::test]
async fn malformed_event_is_rejected_without_dispatch() {
    let fake = FakeNotifier::new("stdout");
    let controller = controller_with(&[&fake]).await;

    let (status, body) = send(&controller, post_json("/test", r#"{"EventId": "#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("invalid event"));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn wrongly_typed_event_is_rejected() {
    let fake = FakeNotifier::new("stdout");
    let controller = controller_with(&[&fake]).await;

    let (status, _) = send(&controller, post_json("/test", r#"{"EventName": 7}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn delivery_failure_does_not_fail_the_request() {
    let failing = FakeNotifier::failing("hipchat");
    let fake = FakeNotifier::new("stdout");
    let controller = controller_with(&[&failing, &fake]).await;

    let (status, _) = send(&controller, post_json("/test", r#"{"EventId": "e3"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(failing.delivered_ids(), vec!["e3"]);
    assert_eq!(fake.delivered_ids(), vec!["e3"]);
}

#[tokio::test]
async fn stash_registration_returns_sequential_ids() {
    let controller = controller_with(&[]).await;

    for expected in 1..=3 {
        let (status, body) = send(
            &controller,
            post_json("/stash", r#"{"event_name": "DeleteBucket"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "id": expected }));
    }
}

#[tokio::test]
async fn malformed_stash_is_rejected() {
    let controller = controller_with(&[]).await;

    let (status, body) = send(&controller, post_json("/stash", "not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("invalid stash"));
    assert!(controller.stashes().await.is_empty());
}

#[tokio::test]
async fn registered_stash_suppresses_later_events() {
    let fake = FakeNotifier::new("stdout");
    let controller = controller_with(&[&fake]).await;

    send(
        &controller,
        post_json("/stash", r#"{"event_name": "DeleteBucket"}"#),
    )
    .await;
    send(
        &controller,
        post_json("/test", r#"{"EventId": "e1", "EventName": "DeleteBucket"}"#),
    )
    .await;
    send(
        &controller,
        post_json("/test", r#"{"EventId": "e2", "EventName": "CreateBucket"}"#),
    )
    .await;

    assert_eq!(fake.delivered_ids(), vec!["e2"]);
}

#[tokio::test]
async fn lists_registered_stashes() {
    let controller = controller_with(&[]).await;
    controller.add_stash(Stash::for_event_name("A")).await;
    controller.add_stash(Stash::for_user_name("bob")).await;

    let (status, body) = send(&controller, get_request("/stash")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "1": {"event_name": "A"},
            "2": {"user_name": "bob"}
        })
    );
}

#[tokio::test]
async fn health_reports_registry() {
    let fake = FakeNotifier::new("stdout");
    let controller = controller_with(&[&fake]).await;
    controller.add_stash(Stash::for_event_name("A")).await;

    let (status, body) = send(&controller, get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({"status": "ok", "stashes": 1, "notifiers": ["stdout"]})
    );
}
