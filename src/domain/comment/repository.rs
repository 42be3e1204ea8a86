// src/domain/comment/repository.rs
use crate::domain::comment::entity::{Comment, CommentWithStats, NewComment};
use crate::domain::comment::value_objects::{CommentId, CommentListCursor, ReactionKind};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use crate::domain::video::VideoId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, new_comment: NewComment) -> DomainResult<Comment>;

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    /// Author-scoped delete; returns `true` when a row was deleted. A comment
    /// someone else wrote is not visible to this operation.
    async fn delete_authored(&self, id: CommentId, author_id: UserId) -> DomainResult<bool>;

    /// Page of top-level comments (`parent = None`) or replies of one parent,
    /// newest first. `viewer` scopes the per-row reaction lookup; `None`
    /// matches zero reaction rows.
    async fn list_page(
        &self,
        video_id: VideoId,
        parent_id: Option<CommentId>,
        viewer: Option<UserId>,
        limit: u32,
        cursor: Option<CommentListCursor>,
    ) -> DomainResult<(Vec<CommentWithStats>, Option<CommentListCursor>)>;
}

#[async_trait]
pub trait CommentReactionRepository: Send + Sync {
    async fn find_kind(
        &self,
        comment_id: CommentId,
        user_id: UserId,
    ) -> DomainResult<Option<ReactionKind>>;

    /// Insert or replace the viewer's reaction on a comment.
    async fn upsert(
        &self,
        comment_id: CommentId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> DomainResult<()>;

    /// Returns `true` when a row was deleted.
    async fn delete(&self, comment_id: CommentId, user_id: UserId) -> DomainResult<bool>;
}
