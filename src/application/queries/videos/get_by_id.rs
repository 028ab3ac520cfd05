use super::VideoQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::video::{Video, VideoId},
};

pub struct GetVideoQuery {
    pub id: VideoId,
}

impl VideoQueryService {
    pub async fn get_video(&self, query: GetVideoQuery) -> ApplicationResult<Video> {
        let video = self
            .video_repo
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("video {} not found", query.id)))?;
        Ok(video)
    }
}
