use crate::domain::comment::{CommentWithStats, ReactionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{serde_time, users::UserDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKindDto {
    Like,
    Dislike,
}

impl From<ReactionKind> for ReactionKindDto {
    fn from(kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Like => Self::Like,
            ReactionKind::Dislike => Self::Dislike,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: Uuid,
    pub video_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub body: String,
    pub author: UserDto,
    pub like_count: u64,
    pub dislike_count: u64,
    pub reply_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_reaction: Option<ReactionKindDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<CommentWithStats> for CommentDto {
    fn from(row: CommentWithStats) -> Self {
        Self {
            id: row.comment.id.into(),
            video_id: row.comment.video_id.into(),
            parent_id: row.comment.parent_id.map(Into::into),
            body: row.comment.body.into(),
            author: row.author.into(),
            like_count: row.like_count,
            dislike_count: row.dislike_count,
            reply_count: row.reply_count,
            viewer_reaction: row.viewer_reaction.map(Into::into),
            created_at: row.comment.created_at,
            updated_at: row.comment.updated_at,
        }
    }
}
