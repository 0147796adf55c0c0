// src/application/functions/mod.rs
pub mod registry;
pub mod server_time;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::{ApplicationResult, dto::CallContext};

pub use registry::FunctionRegistry;
pub use server_time::GetServerTime;

/// A remotely invokable entry point.
///
/// `data` arrives already decoded from the wire format; the returned value is
/// encoded by the transport.
#[async_trait]
pub trait CallableFunction: Send + Sync {
    async fn call(&self, data: Value, context: CallContext) -> ApplicationResult<Value>;
}
