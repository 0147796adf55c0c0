// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    project_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

impl AppConfig {
    /// Build configuration from the process environment. `.env` loading is
    /// left to the caller.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Container platforms hand out a bare port; bind every interface then.
        let listen_addr = match lookup("PORT") {
            Some(port) => {
                let port = port
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::Invalid(format!("PORT must be a u16, got `{port}`")))?;
                format!("0.0.0.0:{port}")
            }
            None => lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr),
        };

        if listen_addr.trim().is_empty() {
            return Err(ConfigError::Missing("LISTEN_ADDR"));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let project_id = lookup("GCLOUD_PROJECT")
            .or_else(|| lookup("GOOGLE_CLOUD_PROJECT"))
            .filter(|p| !p.trim().is_empty());

        Ok(Self {
            listen_addr,
            allowed_origins,
            project_id,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Allowed CORS origins. Empty means "mirror the caller's origin".
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}
