// src/infrastructure/app_context.rs
use std::sync::{Arc, OnceLock};
use thiserror::Error;

static DEFAULT_APP: OnceLock<Arc<AppContext>> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppContextError {
    #[error("the default app context has already been initialized")]
    AlreadyInitialized,
    #[error("the default app context has not been initialized; call initialize_app first")]
    NotInitialized,
}

#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub project_id: Option<String>,
}

/// Process-wide handle to host services. Functions can only be registered
/// against an existing context.
#[derive(Debug)]
pub struct AppContext {
    project_id: Option<String>,
}

impl AppContext {
    /// Build a context that is not installed as the process default.
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        Self {
            project_id: options.project_id,
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}

/// Install the process default context. Fails if one already exists.
pub fn initialize_app(options: AppOptions) -> Result<(), AppContextError> {
    let mut created = false;
    let ctx = DEFAULT_APP.get_or_init(|| {
        created = true;
        Arc::new(AppContext::new(options))
    });
    if !created {
        return Err(AppContextError::AlreadyInitialized);
    }

    tracing::info!(
        project_id = ctx.project_id().unwrap_or("<unset>"),
        "app context initialized"
    );
    Ok(())
}

/// The process default context installed by [`initialize_app`].
pub fn app() -> Result<Arc<AppContext>, AppContextError> {
    DEFAULT_APP
        .get()
        .map(Arc::clone)
        .ok_or(AppContextError::NotInitialized)
}
