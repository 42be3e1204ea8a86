// src/domain/subscription/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::subscription::entity::{NewSubscription, Subscription};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn insert(&self, new_subscription: NewSubscription) -> DomainResult<Subscription>;

    /// Returns `true` when a row was deleted.
    async fn delete(&self, subscriber_id: UserId, creator_id: UserId) -> DomainResult<bool>;

    async fn exists(&self, subscriber_id: UserId, creator_id: UserId) -> DomainResult<bool>;

    async fn count_for_creator(&self, creator_id: UserId) -> DomainResult<u64>;
}
