// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{User, UserProfile},
    value_objects::{ExternalId, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_external_id(&self, external_id: &ExternalId) -> DomainResult<Option<User>>;

    /// Single aggregate read for the profile view. `viewer` is the resolved
    /// caller identity; `None` means the subscription predicate matches zero
    /// rows, never that the filter is dropped.
    async fn find_profile(
        &self,
        target: UserId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<UserProfile>>;
}
