// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::videos::VideoCommandService, queries::videos::VideoQueryService},
    domain::{
        user::UserProfileRepository,
        video::{VideoReadRepository, VideoWriteRepository},
    },
};

pub struct ApplicationServices {
    pub video_queries: Arc<VideoQueryService>,
    pub video_commands: Arc<VideoCommandService>,
}

impl ApplicationServices {
    pub fn new(
        video_read_repo: Arc<dyn VideoReadRepository>,
        video_write_repo: Arc<dyn VideoWriteRepository>,
        user_repo: Arc<dyn UserProfileRepository>,
    ) -> Self {
        let video_queries = Arc::new(VideoQueryService::new(
            Arc::clone(&video_read_repo),
            Arc::clone(&user_repo),
        ));
        let video_commands = Arc::new(VideoCommandService::new(
            Arc::clone(&video_read_repo),
            Arc::clone(&video_write_repo),
        ));

        Self {
            video_queries,
            video_commands,
        }
    }
}
