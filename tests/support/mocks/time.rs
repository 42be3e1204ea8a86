// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use tubular_core::application::ports::time::Clock;

/// Deterministic clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
