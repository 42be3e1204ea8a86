// src/domain/video/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use crate::domain::video::{entity::Video, value_objects::VideoId};
use async_trait::async_trait;

#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<Video>>;

    /// Owner-scoped lookup: a video that exists but belongs to someone else
    /// is indistinguishable from one that does not exist.
    async fn find_owned(&self, id: VideoId, owner: UserId) -> DomainResult<Option<Video>>;

    async fn count_by_owner(&self, owner: UserId) -> DomainResult<u64>;
}
