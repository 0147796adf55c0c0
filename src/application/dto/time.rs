// src/application/dto/time.rs
use crate::domain::time::ServerTimestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result payload of `getServerTime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeResponse {
    /// ISO-8601 UTC timestamp with millisecond precision.
    #[schema(example = "2024-01-01T00:00:00.000Z")]
    pub time: String,
}

impl From<ServerTimestamp> for TimeResponse {
    fn from(value: ServerTimestamp) -> Self {
        Self {
            time: value.to_iso8601(),
        }
    }
}
