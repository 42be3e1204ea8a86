use super::SubscriptionCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    identity::require_caller,
};
use crate::domain::subscription::NewSubscription;
use crate::domain::user::{ExternalId, UserId};

pub struct SubscribeCommand {
    pub creator_id: String,
}

impl SubscriptionCommandService {
    pub async fn subscribe(
        &self,
        caller: Option<&ExternalId>,
        command: SubscribeCommand,
    ) -> ApplicationResult<()> {
        let creator_id = UserId::parse(&command.creator_id)?;
        let caller = require_caller(self.user_repo.as_ref(), caller).await?;

        let creator = self
            .user_repo
            .find_by_id(creator_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("creator not found"))?;

        let new_subscription = NewSubscription::new(caller.id, creator.id, self.clock.now())?;

        // Duplicate pairs surface as Conflict from the unique constraint.
        self.subscription_repo.insert(new_subscription).await?;

        tracing::debug!(
            subscriber = %caller.id,
            creator = %creator.id,
            "subscription created"
        );
        Ok(())
    }
}
