use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::subscription::SubscriptionRepository;
use crate::domain::user::UserRepository;

pub struct SubscriptionCommandService {
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SubscriptionCommandService {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscription_repo,
            user_repo,
            clock,
        }
    }
}
