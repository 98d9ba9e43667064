//! UTC timestamps for session and report bookkeeping.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time at which a session started or a report was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Whole milliseconds from `earlier` to `self`, clamped at zero.
    pub fn millis_since(&self, earlier: &Timestamp) -> u64 {
        u64::try_from((self.0 - earlier.0).num_milliseconds()).unwrap_or(0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64, millis: u32) -> Timestamp {
        Utc.timestamp_opt(secs, millis * 1_000_000).unwrap().into()
    }

    #[test]
    fn millis_since_counts_forward() {
        assert_eq!(at(100, 250).millis_since(&at(99, 0)), 1_250);
    }

    #[test]
    fn millis_since_clamps_reversed_order() {
        assert_eq!(at(99, 0).millis_since(&at(100, 0)), 0);
    }

    #[test]
    fn displays_as_rfc3339_millis() {
        assert_eq!(at(1_705_314_600, 5).to_string(), "2024-01-15T10:30:00.005Z");
    }

    #[test]
    fn round_trips_through_json_string() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts, at(1_705_314_600, 0));
    }
}
