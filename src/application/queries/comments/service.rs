use std::sync::Arc;

use crate::domain::comment::CommentRepository;
use crate::domain::user::UserRepository;

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            comment_repo,
            user_repo,
        }
    }
}
