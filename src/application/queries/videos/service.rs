use std::sync::Arc;

use crate::domain::{user::UserProfileRepository, video::VideoReadRepository};

pub struct VideoQueryService {
    pub(super) video_repo: Arc<dyn VideoReadRepository>,
    pub(super) user_repo: Arc<dyn UserProfileRepository>,
}

impl VideoQueryService {
    pub fn new(
        video_repo: Arc<dyn VideoReadRepository>,
        user_repo: Arc<dyn UserProfileRepository>,
    ) -> Self {
        Self {
            video_repo,
            user_repo,
        }
    }
}
