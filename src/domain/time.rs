// src/domain/time.rs
use chrono::{DateTime, SecondsFormat, Utc};

/// A single instant on the host clock, always normalised to UTC.
///
/// Renders as `YYYY-MM-DDTHH:mm:ss.sssZ`: RFC 3339 with exactly three
/// fractional digits and a literal `Z` offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerTimestamp(DateTime<Utc>);

impl ServerTimestamp {
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
