// tests/e2e_error_statuses.rs
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

/// POST 以外のメソッドで 400 INVALID_ARGUMENT を返すことを確認する
#[tokio::test]
async fn e2e_get_method_returns_invalid_argument() {
    let app = support::make_test_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/getServerTime")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "INVALID_ARGUMENT").await;
}

/// JSON 以外の Content-Type で 400 を返すことを確認する
#[tokio::test]
async fn e2e_wrong_content_type_returns_invalid_argument() {
    let app = support::make_test_router();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/getServerTime")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"data":{}}"#))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "INVALID_ARGUMENT").await;
}

/// data フィールドがない場合に 400 を返すことを確認する
#[tokio::test]
async fn e2e_missing_data_returns_invalid_argument() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::callable_request("getServerTime", &json!({"payload": {}})))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "INVALID_ARGUMENT").await;
}

/// data 以外の余分なフィールドで 400 を返すことを確認する
#[tokio::test]
async fn e2e_extra_fields_return_invalid_argument() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::callable_request(
            "getServerTime",
            &json!({"data": {}, "extra": true}),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "INVALID_ARGUMENT").await;
}

/// 不正な JSON ボディで 400 を返すことを確認する
#[tokio::test]
async fn e2e_malformed_json_returns_invalid_argument() {
    let app = support::make_test_router();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/getServerTime")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "INVALID_ARGUMENT").await;
}

/// 存在しない関数名で 404 NOT_FOUND を返すことを確認する
#[tokio::test]
async fn e2e_unknown_function_returns_not_found() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::callable_request("getServerDate", &json!({"data": {}})))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
