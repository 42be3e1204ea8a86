// src/domain/video/entity.rs
use crate::domain::user::UserId;
use crate::domain::video::value_objects::VideoId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Video {
    pub id: VideoId,
    pub owner_id: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
