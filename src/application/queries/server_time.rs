// src/application/queries/server_time.rs
use std::sync::Arc;

use serde_json::Value;

use crate::{
    application::{
        dto::{CallContext, TimeResponse},
        ports::ClockPort,
    },
    domain::time::ServerTimestamp,
};

/// Answers "what time is it on the server?".
///
/// Reads the injected clock once per call and nothing else: no caching, no
/// logging, no I/O.
pub struct ServerTimeQueryService {
    clock: Arc<ClockPort>,
}

impl ServerTimeQueryService {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self { clock }
    }

    /// Both the payload and the caller context are ignored.
    pub fn get_server_time(&self, _input: &Value, _context: &CallContext) -> TimeResponse {
        TimeResponse::from(ServerTimestamp::new(self.clock.now()))
    }
}
