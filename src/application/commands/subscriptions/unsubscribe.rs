use super::SubscriptionCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    identity::require_caller,
};
use crate::domain::user::{ExternalId, UserId};

pub struct UnsubscribeCommand {
    pub creator_id: String,
}

impl SubscriptionCommandService {
    pub async fn unsubscribe(
        &self,
        caller: Option<&ExternalId>,
        command: UnsubscribeCommand,
    ) -> ApplicationResult<()> {
        let creator_id = UserId::parse(&command.creator_id)?;
        let caller = require_caller(self.user_repo.as_ref(), caller).await?;

        let deleted = self
            .subscription_repo
            .delete(caller.id, creator_id)
            .await?;

        if !deleted {
            return Err(ApplicationError::not_found("subscription not found"));
        }

        tracing::debug!(
            subscriber = %caller.id,
            creator = %creator_id,
            "subscription removed"
        );
        Ok(())
    }
}
