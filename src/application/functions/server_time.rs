// src/application/functions/server_time.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::CallableFunction;
use crate::application::{
    ApplicationResult, dto::CallContext, error::ApplicationError,
    queries::ServerTimeQueryService,
};

/// `getServerTime` entry point backed by [`ServerTimeQueryService`].
pub struct GetServerTime {
    queries: Arc<ServerTimeQueryService>,
}

impl GetServerTime {
    pub const NAME: &'static str = "getServerTime";

    pub fn new(queries: Arc<ServerTimeQueryService>) -> Self {
        Self { queries }
    }
}

#[async_trait]
impl CallableFunction for GetServerTime {
    async fn call(&self, data: Value, context: CallContext) -> ApplicationResult<Value> {
        let response = self.queries.get_server_time(&data, &context);
        serde_json::to_value(response).map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}
