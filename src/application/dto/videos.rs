use crate::domain::video::Video;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoDto {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.into(),
            owner_id: video.owner_id.into(),
            title: video.title,
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}
