// src/domain/subscription/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Subscription {
    pub subscriber_id: UserId,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub subscriber_id: UserId,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewSubscription {
    /// Self-subscription is rejected here rather than tolerated; the schema
    /// carries a matching CHECK constraint.
    pub fn new(
        subscriber_id: UserId,
        creator_id: UserId,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if subscriber_id == creator_id {
            return Err(DomainError::Validation(
                "cannot subscribe to yourself".into(),
            ));
        }
        Ok(Self {
            subscriber_id,
            creator_id,
            created_at,
        })
    }
}
