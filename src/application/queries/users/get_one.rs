use super::UserQueryService;
use crate::application::{
    dto::UserProfileDto,
    error::{ApplicationError, ApplicationResult},
    identity::resolve_viewer,
};
use crate::domain::user::{ExternalId, UserId};

pub struct GetUserQuery {
    pub id: String,
}

impl UserQueryService {
    /// Profile aggregate read. Two sequential storage reads: resolve the
    /// viewer, then fetch the target row joined with the subscription flag
    /// and both counts. A syntactically invalid target id fails before
    /// either one.
    pub async fn get_one(
        &self,
        viewer: Option<&ExternalId>,
        query: GetUserQuery,
    ) -> ApplicationResult<UserProfileDto> {
        let target = UserId::parse(&query.id)?;

        let viewer_id = resolve_viewer(self.user_repo.as_ref(), viewer).await?;

        let profile = self
            .user_repo
            .find_profile(target, viewer_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(profile.into())
    }
}
