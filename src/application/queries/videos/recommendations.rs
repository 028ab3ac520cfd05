use super::VideoQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::video::{Category, Video, VideoId},
};

/// Raw candidates for the related-videos section. The caller still runs
/// them through `select_recommendations`.
pub struct ListRecommendationCandidatesQuery {
    pub category: Category,
    pub exclude: VideoId,
}

impl VideoQueryService {
    pub async fn get_recommendations(
        &self,
        query: ListRecommendationCandidatesQuery,
    ) -> ApplicationResult<Vec<Video>> {
        let videos = self
            .video_repo
            .list_by_category(&query.category, &query.exclude)
            .await?;
        Ok(videos)
    }
}
