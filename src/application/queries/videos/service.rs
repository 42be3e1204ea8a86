use std::sync::Arc;

use crate::domain::user::UserRepository;
use crate::domain::video::VideoRepository;

pub struct VideoQueryService {
    pub(super) video_repo: Arc<dyn VideoRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl VideoQueryService {
    pub fn new(video_repo: Arc<dyn VideoRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            video_repo,
            user_repo,
        }
    }
}
