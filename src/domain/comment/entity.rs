// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentBody, CommentId, ReactionKind};
use crate::domain::user::{User, UserId};
use crate::domain::video::VideoId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub video_id: VideoId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub video_id: VideoId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}

/// One row of the comment read model: the comment joined with its author's
/// public fields, reaction tallies, the reply count, and the viewer's own
/// reaction (always `None` for an anonymous viewer).
#[derive(Debug, Clone)]
pub struct CommentWithStats {
    pub comment: Comment,
    pub author: User,
    pub like_count: u64,
    pub dislike_count: u64,
    pub reply_count: u64,
    pub viewer_reaction: Option<ReactionKind>,
}
