// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source behind the write paths. Subscription and comment timestamps
/// come through here so tests can pin them to fixed instants.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
