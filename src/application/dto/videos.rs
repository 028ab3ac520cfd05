use crate::domain::video::Video;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub media_url: String,
    pub owner_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Video> for VideoDto {
    fn from(video: Video) -> Self {
        let created_at = video.created_at();
        Self {
            id: video.id.into_inner(),
            title: video.title,
            description: video.description,
            category: video.category.into_inner(),
            location: video.location,
            media_url: video.media_url.into_inner(),
            owner_id: video.owner_id.into_inner(),
            created_at,
        }
    }
}
