// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use server_time::application::{ports::time::Clock, services::ApplicationServices};
use server_time::infrastructure::{
    app_context::{AppContext, AppOptions},
    time::SystemClock,
};
use server_time::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;

pub fn build_test_state(clock: Arc<dyn Clock>) -> HttpState {
    let app = Arc::new(AppContext::new(AppOptions {
        project_id: Some("test-project".into()),
    }));
    let services =
        Arc::new(ApplicationServices::new(app, clock).expect("register callable functions"));
    HttpState { services }
}

/// Router whose clock is pinned to `mocks::fixed_now()`.
pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(Arc::new(mocks::FixedClock)), &[])
}

/// Router backed by the real system clock.
pub fn make_system_clock_router() -> axum::Router {
    build_router(build_test_state(Arc::new(SystemClock)), &[])
}

/// POST a callable envelope `body` to `/{function}`.
pub fn callable_request(function: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(format!("/{function}"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is a callable error envelope with the expected
/// HTTP status and canonical code.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_code: &str,
) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "body: {json}");
    let code = json["error"]["status"].as_str().unwrap_or("");
    let msg = json["error"]["message"].as_str().unwrap_or("");
    assert_eq!(code, expected_code, "unexpected error status: {}", code);
    assert!(!msg.is_empty(), "expected non-empty error message");
}

/// `YYYY-MM-DDTHH:mm:ss.sssZ`
pub fn is_iso_millis_utc(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 24
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            10 => *b == b'T',
            13 | 16 => *b == b':',
            19 => *b == b'.',
            23 => *b == b'Z',
            _ => b.is_ascii_digit(),
        })
}
