// src/presentation/http/controllers/callable.rs
use crate::presentation::http::{
    codec,
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::{Caller, EXECUTION_ID_HEADER},
    state::HttpState,
};
use crate::application::dto::CallContext;
use axum::{
    Extension, Json,
    body::Bytes,
    extract::Path,
    http::{HeaderMap, HeaderValue, Method, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::Instrument;
use utoipa::ToSchema;

/// Request envelope. `data` must be present but may be `null`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CallableRequest {
    #[schema(value_type = Object)]
    pub data: Value,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CallableResponse {
    #[schema(value_type = Object)]
    pub result: Value,
}

#[utoipa::path(
    post,
    path = "/{function}",
    params(("function" = String, Path, description = "Callable entry point name, e.g. `getServerTime`")),
    request_body = CallableRequest,
    responses(
        (status = 200, description = "Function result. `getServerTime` returns a TimeResponse.", body = CallableResponse),
        (status = 400, description = "Malformed callable request", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown function", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Function failed", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Functions"
)]
pub async fn invoke(
    Extension(state): Extension<HttpState>,
    Path(function): Path<String>,
    method: Method,
    Caller(context): Caller,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let execution_id = context.execution_id.to_string();
    let span = tracing::info_span!("callable", function = %function, execution_id = %execution_id);

    let outcome = dispatch(&state, &function, &method, &headers, &body, context)
        .instrument(span)
        .await;

    let mut response = match outcome {
        Ok(result) => Json(CallableResponse { result }).into_response(),
        Err(err) => {
            tracing::info!(
                function = %function,
                execution_id = %execution_id,
                code = err.code().as_str(),
                message = err.message(),
                "callable invocation failed"
            );
            err.into_response()
        }
    };
    if let Ok(value) = HeaderValue::from_str(&execution_id) {
        response.headers_mut().insert(EXECUTION_ID_HEADER, value);
    }
    response
}

async fn dispatch(
    state: &HttpState,
    function: &str,
    method: &Method,
    headers: &HeaderMap,
    body: &[u8],
    context: CallContext,
) -> HttpResult<Value> {
    if *method != Method::POST {
        tracing::warn!(%method, "rejected callable request with invalid method");
        return Err(HttpError::invalid_argument(format!(
            "request has invalid method {method}"
        )));
    }
    if !is_json(headers) {
        tracing::warn!("rejected callable request with non-JSON content type");
        return Err(HttpError::invalid_argument("request has incorrect Content-Type"));
    }

    let data = parse_envelope(body)?;
    let handler = state.services.function(function).into_http()?;

    let result = handler.call(codec::decode(data), context).await.into_http()?;
    tracing::debug!("callable function completed");
    Ok(result)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Pull `data` out of `{"data": ...}`, rejecting anything else.
fn parse_envelope(body: &[u8]) -> HttpResult<Value> {
    let Ok(Value::Object(mut envelope)) = serde_json::from_slice::<Value>(body) else {
        return Err(HttpError::invalid_argument("bad request"));
    };
    let Some(data) = envelope.remove("data") else {
        tracing::warn!("request body is missing data");
        return Err(HttpError::invalid_argument("bad request"));
    };
    if !envelope.is_empty() {
        let extra: Vec<&str> = envelope.keys().map(String::as_str).collect();
        tracing::warn!(fields = %extra.join(", "), "request body has extra fields");
        return Err(HttpError::invalid_argument("bad request"));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_content_type_accepts_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("Application/JSON; charset=utf-8"));
        assert!(is_json(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!is_json(&headers));

        assert!(!is_json(&HeaderMap::new()));
    }

    #[test]
    fn envelope_allows_null_data() {
        assert_eq!(parse_envelope(br#"{"data": null}"#).unwrap(), Value::Null);
        assert_eq!(
            parse_envelope(br#"{"data": {"foo": "bar"}}"#).unwrap(),
            json!({"foo": "bar"})
        );
    }

    #[test]
    fn envelope_rejects_missing_data_extra_keys_and_non_objects() {
        let bodies: [&[u8]; 4] = [br#"{}"#, br#"{"data": 1, "other": 2}"#, br#"[1]"#, b"not json"];
        for body in bodies {
            let err = parse_envelope(body).unwrap_err();
            assert_eq!(err.message(), "bad request");
        }
    }

    #[test]
    fn results_are_serialized_as_plain_json() {
        let body = serde_json::to_value(CallableResponse {
            result: json!({"big": u64::MAX}),
        })
        .unwrap();
        assert_eq!(body, json!({"result": {"big": 18_446_744_073_709_551_615_u64}}));
    }
}
