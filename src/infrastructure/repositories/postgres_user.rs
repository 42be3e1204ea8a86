// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{DisplayName, ExternalId, User, UserId, UserProfile, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    external_id: String,
    name: String,
    image_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id),
            external_id: ExternalId::new(row.external_id)?,
            name: DisplayName::new(row.name)?,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: Uuid,
    external_id: String,
    name: String,
    image_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    viewer_subscribed: bool,
    video_count: i64,
    subscriber_count: i64,
}

impl TryFrom<ProfileRow> for UserProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let user = User {
            id: UserId::new(row.id),
            external_id: ExternalId::new(row.external_id)?,
            name: DisplayName::new(row.name)?,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };

        Ok(Self {
            user,
            viewer_subscribed: row.viewer_subscribed,
            video_count: u64::try_from(row.video_count).unwrap_or_default(),
            subscriber_count: u64::try_from(row.subscriber_count).unwrap_or_default(),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, external_id, name, image_url, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_external_id(&self, external_id: &ExternalId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, external_id, name, image_url, created_at, updated_at
             FROM users WHERE external_id = $1",
        )
        .bind(external_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_profile(
        &self,
        target: UserId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<UserProfile>> {
        // The viewer binds as NULL for anonymous callers; `subscriber_id =
        // NULL` matches no row, so the left join yields viewer_subscribed =
        // false rather than an unfiltered join.
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT u.id, u.external_id, u.name, u.image_url, u.created_at, u.updated_at,
                    (vs.subscriber_id IS NOT NULL) AS viewer_subscribed,
                    (SELECT COUNT(*) FROM videos v WHERE v.owner_id = u.id) AS video_count,
                    (SELECT COUNT(*) FROM subscriptions s WHERE s.creator_id = u.id) AS subscriber_count
             FROM users u
             LEFT JOIN subscriptions vs
               ON vs.creator_id = u.id AND vs.subscriber_id = $2
             WHERE u.id = $1",
        )
        .bind(target.as_uuid())
        .bind(viewer.map(Uuid::from))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UserProfile::try_from).transpose()
    }
}
