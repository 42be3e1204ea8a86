use super::CommentCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    identity::require_caller,
};
use crate::domain::comment::CommentId;
use crate::domain::user::ExternalId;

pub struct RemoveCommentCommand {
    pub id: String,
}

impl CommentCommandService {
    /// The delete is scoped by author, so a comment written by someone else
    /// is reported as absent rather than forbidden.
    pub async fn remove(
        &self,
        caller: Option<&ExternalId>,
        command: RemoveCommentCommand,
    ) -> ApplicationResult<()> {
        let id = CommentId::parse(&command.id)?;
        let caller = require_caller(self.user_repo.as_ref(), caller).await?;

        let deleted = self.comment_repo.delete_authored(id, caller.id).await?;
        if !deleted {
            return Err(ApplicationError::not_found("comment not found"));
        }

        tracing::debug!(comment = %id, "comment deleted");
        Ok(())
    }
}
