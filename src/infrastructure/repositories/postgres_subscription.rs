// src/infrastructure/repositories/postgres_subscription.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::subscription::{NewSubscription, Subscription, SubscriptionRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriptionRow {
    subscriber_id: Uuid,
    creator_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<SubscriptionRow> for Subscription {
    fn from(row: SubscriptionRow) -> Self {
        Self {
            subscriber_id: UserId::new(row.subscriber_id),
            creator_id: UserId::new(row.creator_id),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn insert(&self, new_subscription: NewSubscription) -> DomainResult<Subscription> {
        let NewSubscription {
            subscriber_id,
            creator_id,
            created_at,
        } = new_subscription;

        let row = sqlx::query_as::<_, SubscriptionRow>(
            "INSERT INTO subscriptions (subscriber_id, creator_id, created_at)
             VALUES ($1, $2, $3)
             RETURNING subscriber_id, creator_id, created_at",
        )
        .bind(subscriber_id.as_uuid())
        .bind(creator_id.as_uuid())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn delete(&self, subscriber_id: UserId, creator_id: UserId) -> DomainResult<bool> {
        let result =
            sqlx::query("DELETE FROM subscriptions WHERE subscriber_id = $1 AND creator_id = $2")
                .bind(subscriber_id.as_uuid())
                .bind(creator_id.as_uuid())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, subscriber_id: UserId, creator_id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM subscriptions WHERE subscriber_id = $1 AND creator_id = $2
             )",
        )
        .bind(subscriber_id.as_uuid())
        .bind(creator_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn count_for_creator(&self, creator_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM subscriptions WHERE creator_id = $1")
            .bind(creator_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }
}
