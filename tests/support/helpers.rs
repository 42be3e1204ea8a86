// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{FixedClock, InMemoryStore, TokenAsSubjectIdentityProvider};
use tubular_core::application::services::ApplicationServices;
use tubular_core::domain::comment::{CommentReactionRepository, CommentRepository};
use tubular_core::domain::subscription::SubscriptionRepository;
use tubular_core::domain::user::UserRepository;
use tubular_core::domain::video::VideoRepository;
use tubular_core::presentation::http::{routes, state::HttpState};

pub fn build_services(store: &Arc<InMemoryStore>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::clone(store) as Arc<dyn UserRepository>,
        Arc::clone(store) as Arc<dyn VideoRepository>,
        Arc::clone(store) as Arc<dyn SubscriptionRepository>,
        Arc::clone(store) as Arc<dyn CommentRepository>,
        Arc::clone(store) as Arc<dyn CommentReactionRepository>,
        Arc::new(TokenAsSubjectIdentityProvider),
        Arc::new(FixedClock::default()),
    ))
}

/// Router wired against the in-memory store, with the rate limiter disabled
/// so request bursts inside one test binary are not throttled.
pub fn make_test_router(store: &Arc<InMemoryStore>) -> axum::Router {
    let state = HttpState {
        services: build_services(store),
    };
    routes::build_router_with_rate_limiter(state, false)
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_request(uri: &str, token: Option<&str>, payload: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match payload {
        Some(payload) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn delete_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Drive one request through the router and decode the JSON body (or `Null`
/// for an empty body).
pub async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub fn assert_error_body(status: StatusCode, body: &Value, expected_status: StatusCode) {
    assert_eq!(status, expected_status);
    let message = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert!(!message.is_empty(), "expected non-empty error message: {body}");
    let error = body.get("error").and_then(Value::as_str).unwrap_or("");
    assert!(!error.is_empty(), "expected non-empty error field: {body}");
}
