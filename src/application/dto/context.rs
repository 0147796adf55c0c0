// src/application/dto/context.rs
use uuid::Uuid;

/// Metadata the host attaches to every invocation.
///
/// Tokens are carried exactly as received. Nothing in this crate verifies
/// them; handlers that care must do so themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub auth_token: Option<String>,
    pub app_check_token: Option<String>,
    pub instance_id_token: Option<String>,
    pub execution_id: Uuid,
}

#[cfg(test)]
impl CallContext {
    /// Context with no caller credentials and a fresh execution id.
    pub(crate) fn anonymous() -> Self {
        Self {
            auth_token: None,
            app_check_token: None,
            instance_id_token: None,
            execution_id: Uuid::new_v4(),
        }
    }
}
