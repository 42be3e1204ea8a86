use super::VideoQueryService;
use crate::application::{
    dto::VideoDto,
    error::{ApplicationError, ApplicationResult},
    identity::require_caller,
};
use crate::domain::user::ExternalId;
use crate::domain::video::VideoId;

pub struct GetOwnedVideoQuery {
    pub id: String,
}

impl VideoQueryService {
    /// Studio read: fetch one of the caller's own videos. The lookup is
    /// scoped by owner, so someone else's video reads as absent rather than
    /// forbidden.
    pub async fn get_owned(
        &self,
        caller: Option<&ExternalId>,
        query: GetOwnedVideoQuery,
    ) -> ApplicationResult<VideoDto> {
        let id = VideoId::parse(&query.id)?;
        let caller = require_caller(self.user_repo.as_ref(), caller).await?;

        let video = self
            .video_repo
            .find_owned(id, caller.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;

        Ok(video.into())
    }
}
