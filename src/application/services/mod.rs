// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        functions::{CallableFunction, FunctionRegistry, GetServerTime},
        ports::time::Clock,
        queries::ServerTimeQueryService,
    },
    infrastructure::app_context::AppContext,
};

pub struct ApplicationServices {
    functions: FunctionRegistry,
}

impl ApplicationServices {
    /// Wire the query services and register every callable entry point
    /// against `app`.
    pub fn new(app: Arc<AppContext>, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        let server_time_queries = Arc::new(ServerTimeQueryService::new(Arc::clone(&clock)));

        let mut functions = FunctionRegistry::new(app);
        functions.register(
            GetServerTime::NAME,
            Arc::new(GetServerTime::new(server_time_queries)),
        )?;

        Ok(Self { functions })
    }

    pub const fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    pub fn function(&self, name: &str) -> ApplicationResult<Arc<dyn CallableFunction>> {
        self.functions.get(name)
    }
}
