// src/domain/user/entity.rs
use crate::domain::user::value_objects::{DisplayName, ExternalId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub external_id: ExternalId,
    pub name: DisplayName,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read model produced by the profile aggregate query: the public user row
/// joined with two cardinalities and the viewer-scoped subscription flag.
/// Counts are computed at query time and are never stale by more than the
/// duration of the call.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub viewer_subscribed: bool,
    pub video_count: u64,
    pub subscriber_count: u64,
}
