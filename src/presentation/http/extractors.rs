use crate::application::dto::CallContext;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::convert::Infallible;
use uuid::Uuid;

pub const APP_CHECK_HEADER: &str = "x-firebase-appcheck";
pub const INSTANCE_ID_HEADER: &str = "firebase-instance-id-token";
pub const EXECUTION_ID_HEADER: &str = "function-execution-id";

/// Caller metadata for one invocation. Extraction never rejects: missing or
/// malformed credentials simply leave the field empty.
#[derive(Debug, Clone)]
pub struct Caller(pub CallContext);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(context_from_headers(&parts.headers)))
    }
}

pub fn context_from_headers(headers: &HeaderMap) -> CallContext {
    let auth_token = headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string());

    CallContext {
        auth_token,
        app_check_token: header_string(headers, APP_CHECK_HEADER),
        instance_id_token: header_string(headers, INSTANCE_ID_HEADER),
        execution_id: Uuid::new_v4(),
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
