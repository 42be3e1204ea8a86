use crate::domain::user::{User, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub external_id: String,
    pub name: String,
    pub image_url: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            external_id: user.external_id.into(),
            name: user.name.into(),
            image_url: user.image_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Profile view: the public user fields plus the three values the aggregate
/// read computes for the requesting viewer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub viewer_subscribed: bool,
    pub video_count: u64,
    pub subscriber_count: u64,
}

impl From<UserProfile> for UserProfileDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            user: profile.user.into(),
            viewer_subscribed: profile.viewer_subscribed,
            video_count: profile.video_count,
            subscriber_count: profile.subscriber_count,
        }
    }
}
