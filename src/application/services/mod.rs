// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{comments::CommentCommandService, subscriptions::SubscriptionCommandService},
        ports::{ClockPort, IdentityProviderPort},
        queries::{
            comments::CommentQueryService, users::UserQueryService, videos::VideoQueryService,
        },
    },
    domain::{
        comment::{CommentReactionRepository, CommentRepository},
        subscription::SubscriptionRepository,
        user::UserRepository,
        video::VideoRepository,
    },
};

pub struct ApplicationServices {
    pub user_queries: Arc<UserQueryService>,
    pub video_queries: Arc<VideoQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    identity_provider: Arc<IdentityProviderPort>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        video_repo: Arc<dyn VideoRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn CommentReactionRepository>,
        identity_provider: Arc<IdentityProviderPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let video_queries = Arc::new(VideoQueryService::new(
            Arc::clone(&video_repo),
            Arc::clone(&user_repo),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&user_repo),
        ));
        let subscription_commands = Arc::new(SubscriptionCommandService::new(
            Arc::clone(&subscription_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&reaction_repo),
            Arc::clone(&video_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        Self {
            user_queries,
            video_queries,
            comment_queries,
            subscription_commands,
            comment_commands,
            identity_provider,
        }
    }

    pub fn identity_provider(&self) -> Arc<IdentityProviderPort> {
        Arc::clone(&self.identity_provider)
    }
}
