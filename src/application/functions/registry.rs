// src/application/functions/registry.rs
use std::{collections::BTreeMap, sync::Arc};

use super::CallableFunction;
use crate::{
    application::{ApplicationResult, error::ApplicationError},
    infrastructure::app_context::AppContext,
};

/// Name to handler table. Construction requires an initialized host context,
/// so nothing can be registered before bootstrap has run.
pub struct FunctionRegistry {
    app: Arc<AppContext>,
    functions: BTreeMap<String, Arc<dyn CallableFunction>>,
}

impl FunctionRegistry {
    pub fn new(app: Arc<AppContext>) -> Self {
        Self {
            app,
            functions: BTreeMap::new(),
        }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        function: Arc<dyn CallableFunction>,
    ) -> ApplicationResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ApplicationError::validation("function name must not be empty"));
        }
        if self.functions.contains_key(&name) {
            return Err(ApplicationError::validation(format!(
                "function `{name}` is already registered"
            )));
        }
        tracing::debug!(
            function = %name,
            project_id = self.app.project_id().unwrap_or("<unset>"),
            "registered callable function"
        );
        self.functions.insert(name, function);
        Ok(())
    }

    pub fn get(&self, name: &str) -> ApplicationResult<Arc<dyn CallableFunction>> {
        self.functions
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| ApplicationError::not_found(format!("function `{name}` does not exist")))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}
