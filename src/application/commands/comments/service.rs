use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::comment::{CommentReactionRepository, CommentRepository};
use crate::domain::user::UserRepository;
use crate::domain::video::VideoRepository;

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) reaction_repo: Arc<dyn CommentReactionRepository>,
    pub(super) video_repo: Arc<dyn VideoRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn CommentReactionRepository>,
        video_repo: Arc<dyn VideoRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            reaction_repo,
            video_repo,
            user_repo,
            clock,
        }
    }
}
