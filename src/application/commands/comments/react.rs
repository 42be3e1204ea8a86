use super::CommentCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    identity::require_caller,
};
use crate::domain::comment::{CommentId, ReactionKind};
use crate::domain::user::ExternalId;

pub struct ReactToCommentCommand {
    pub comment_id: String,
    pub kind: ReactionKind,
}

impl CommentCommandService {
    /// Toggle semantics: reacting with the kind already recorded removes the
    /// reaction; any other state (none, or the opposite kind) ends with the
    /// requested kind recorded.
    pub async fn react(
        &self,
        caller: Option<&ExternalId>,
        command: ReactToCommentCommand,
    ) -> ApplicationResult<()> {
        let comment_id = CommentId::parse(&command.comment_id)?;
        let caller = require_caller(self.user_repo.as_ref(), caller).await?;

        self.comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let current = self.reaction_repo.find_kind(comment_id, caller.id).await?;

        if current == Some(command.kind) {
            self.reaction_repo.delete(comment_id, caller.id).await?;
        } else {
            self.reaction_repo
                .upsert(comment_id, caller.id, command.kind)
                .await?;
        }

        Ok(())
    }
}
