// src/infrastructure/repositories/postgres_video.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use crate::domain::video::{Video, VideoId, VideoRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VideoRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Self {
            id: VideoId::new(row.id),
            owner_id: UserId::new(row.owner_id),
            title: row.title,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<Video>> {
        let row = sqlx::query_as::<_, VideoRow>(
            "SELECT id, owner_id, title, created_at, updated_at
             FROM videos WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Video::from))
    }

    async fn find_owned(&self, id: VideoId, owner: UserId) -> DomainResult<Option<Video>> {
        let row = sqlx::query_as::<_, VideoRow>(
            "SELECT id, owner_id, title, created_at, updated_at
             FROM videos WHERE id = $1 AND owner_id = $2",
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Video::from))
    }

    async fn count_by_owner(&self, owner: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM videos WHERE owner_id = $1")
            .bind(owner.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }
}
