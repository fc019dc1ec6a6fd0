use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the `timestamp` stamped onto outbound signals.
pub trait Clock {
    /// Current instant as an ISO-8601 string.
    fn now_iso(&self) -> String;
}

/// Wall clock, UTC with millisecond precision (`2024-05-01T12:00:00.000Z`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now_iso(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
