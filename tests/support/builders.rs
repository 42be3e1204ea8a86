// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use tubular_core::domain::user::{DisplayName, ExternalId, User, UserId};
use tubular_core::domain::video::{Video, VideoId};

/// Fixed base instant plus an offset, so ordering in listing tests is
/// deterministic.
pub fn moment(offset_secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_717_243_200 + offset_secs, 0).unwrap()
}

/// A user whose external subject is `ext-<name>`; bearer tokens in tests use
/// the same string, matching the token-as-subject identity double.
pub fn user_named(name: &str) -> User {
    let now = moment(0);
    User {
        id: UserId::new(Uuid::new_v4()),
        external_id: ExternalId::new(format!("ext-{name}")).unwrap(),
        name: DisplayName::new(name).unwrap(),
        image_url: format!("https://img.example.test/{name}.png"),
        created_at: now,
        updated_at: now,
    }
}

pub fn video_owned_by(owner: UserId, title: &str) -> Video {
    let now = moment(0);
    Video {
        id: VideoId::new(Uuid::new_v4()),
        owner_id: owner,
        title: title.into(),
        created_at: now,
        updated_at: now,
    }
}
