// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentListCursor, CommentReactionRepository,
    CommentRepository, CommentWithStats, NewComment, ReactionKind,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{DisplayName, ExternalId, User, UserId};
use crate::domain::video::VideoId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: Uuid,
    video_id: Uuid,
    author_id: Uuid,
    parent_id: Option<Uuid>,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id),
            video_id: VideoId::new(row.video_id),
            author_id: UserId::new(row.author_id),
            parent_id: row.parent_id.map(CommentId::new),
            body: CommentBody::new(row.body)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentStatsRow {
    id: Uuid,
    video_id: Uuid,
    author_id: Uuid,
    parent_id: Option<Uuid>,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_external_id: String,
    author_name: String,
    author_image_url: String,
    author_created_at: DateTime<Utc>,
    author_updated_at: DateTime<Utc>,
    like_count: i64,
    dislike_count: i64,
    reply_count: i64,
    viewer_reaction: Option<String>,
}

impl TryFrom<CommentStatsRow> for CommentWithStats {
    type Error = DomainError;

    fn try_from(row: CommentStatsRow) -> Result<Self, Self::Error> {
        let author = User {
            id: UserId::new(row.author_id),
            external_id: ExternalId::new(row.author_external_id)?,
            name: DisplayName::new(row.author_name)?,
            image_url: row.author_image_url,
            created_at: row.author_created_at,
            updated_at: row.author_updated_at,
        };

        let comment = Comment {
            id: CommentId::new(row.id),
            video_id: VideoId::new(row.video_id),
            author_id: UserId::new(row.author_id),
            parent_id: row.parent_id.map(CommentId::new),
            body: CommentBody::new(row.body)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };

        let viewer_reaction = row
            .viewer_reaction
            .as_deref()
            .map(ReactionKind::from_str)
            .transpose()?;

        Ok(Self {
            comment,
            author,
            like_count: u64::try_from(row.like_count).unwrap_or_default(),
            dislike_count: u64::try_from(row.dislike_count).unwrap_or_default(),
            reply_count: u64::try_from(row.reply_count).unwrap_or_default(),
            viewer_reaction,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, new_comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            video_id,
            author_id,
            parent_id,
            body,
            created_at,
        } = new_comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (video_id, author_id, parent_id, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id, video_id, author_id, parent_id, body, created_at, updated_at",
        )
        .bind(video_id.as_uuid())
        .bind(author_id.as_uuid())
        .bind(parent_id.map(Uuid::from))
        .bind(body.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, video_id, author_id, parent_id, body, created_at, updated_at
             FROM comments WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete_authored(&self, id: CommentId, author_id: UserId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND author_id = $2")
            .bind(id.as_uuid())
            .bind(author_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_page(
        &self,
        video_id: VideoId,
        parent_id: Option<CommentId>,
        viewer: Option<UserId>,
        limit: u32,
        cursor: Option<CommentListCursor>,
    ) -> DomainResult<(Vec<CommentWithStats>, Option<CommentListCursor>)> {
        // One row past the page decides whether a next cursor exists. The
        // viewer reaction join binds NULL for anonymous viewers and so
        // matches nothing.
        let fetch = i64::from(limit) + 1;

        let rows = sqlx::query_as::<_, CommentStatsRow>(
            "SELECT c.id, c.video_id, c.author_id, c.parent_id, c.body,
                    c.created_at, c.updated_at,
                    u.external_id AS author_external_id,
                    u.name AS author_name,
                    u.image_url AS author_image_url,
                    u.created_at AS author_created_at,
                    u.updated_at AS author_updated_at,
                    (SELECT COUNT(*) FROM comment_reactions r
                      WHERE r.comment_id = c.id AND r.kind = 'like') AS like_count,
                    (SELECT COUNT(*) FROM comment_reactions r
                      WHERE r.comment_id = c.id AND r.kind = 'dislike') AS dislike_count,
                    (SELECT COUNT(*) FROM comments rc
                      WHERE rc.parent_id = c.id) AS reply_count,
                    vr.kind AS viewer_reaction
             FROM comments c
             JOIN users u ON u.id = c.author_id
             LEFT JOIN comment_reactions vr
               ON vr.comment_id = c.id AND vr.user_id = $2
             WHERE c.video_id = $1
               AND (($3::uuid IS NULL AND c.parent_id IS NULL) OR c.parent_id = $3)
               AND ($4::timestamptz IS NULL OR (c.created_at, c.id) < ($4, $5))
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $6",
        )
        .bind(video_id.as_uuid())
        .bind(viewer.map(Uuid::from))
        .bind(parent_id.map(Uuid::from))
        .bind(cursor.map(|cursor| cursor.created_at))
        .bind(cursor.map(|cursor| Uuid::from(cursor.id)))
        .bind(fetch)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut items: Vec<CommentWithStats> = rows
            .into_iter()
            .map(CommentWithStats::try_from)
            .collect::<Result<_, _>>()?;

        let page_len = usize::try_from(limit).unwrap_or_default();
        let next_cursor = if items.len() > page_len {
            items.truncate(page_len);
            items.last().map(|row| CommentListCursor {
                created_at: row.comment.created_at,
                id: row.comment.id,
            })
        } else {
            None
        };

        Ok((items, next_cursor))
    }
}

#[derive(Clone)]
pub struct PostgresCommentReactionRepository {
    pool: PgPool,
}

impl PostgresCommentReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentReactionRepository for PostgresCommentReactionRepository {
    async fn find_kind(
        &self,
        comment_id: CommentId,
        user_id: UserId,
    ) -> DomainResult<Option<ReactionKind>> {
        let kind = sqlx::query_scalar::<_, String>(
            "SELECT kind FROM comment_reactions WHERE comment_id = $1 AND user_id = $2",
        )
        .bind(comment_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        kind.as_deref().map(ReactionKind::from_str).transpose()
    }

    async fn upsert(
        &self,
        comment_id: CommentId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO comment_reactions (comment_id, user_id, kind)
             VALUES ($1, $2, $3)
             ON CONFLICT (comment_id, user_id)
             DO UPDATE SET kind = EXCLUDED.kind, created_at = now()",
        )
        .bind(comment_id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn delete(&self, comment_id: CommentId, user_id: UserId) -> DomainResult<bool> {
        let result =
            sqlx::query("DELETE FROM comment_reactions WHERE comment_id = $1 AND user_id = $2")
                .bind(comment_id.as_uuid())
                .bind(user_id.as_uuid())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
