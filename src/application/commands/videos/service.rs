// src/application/commands/videos/service.rs
use std::sync::Arc;

use crate::domain::video::{VideoReadRepository, VideoWriteRepository};

pub struct VideoCommandService {
    pub(super) read_repo: Arc<dyn VideoReadRepository>,
    pub(super) write_repo: Arc<dyn VideoWriteRepository>,
}

impl VideoCommandService {
    pub fn new(
        read_repo: Arc<dyn VideoReadRepository>,
        write_repo: Arc<dyn VideoWriteRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
        }
    }
}
