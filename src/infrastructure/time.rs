// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, TimeZone, Utc};

/// Wall clock truncated to microseconds. The timestamptz columns store
/// microsecond resolution and comment cursors encode the same, so a
/// timestamp must survive a write/read round trip unchanged.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        Utc.timestamp_micros(now.timestamp_micros())
            .single()
            .unwrap_or(now)
    }
}
