// src/domain/video/entity.rs
use crate::domain::user::value_objects::UserId;
use crate::domain::video::value_objects::{Category, MediaUrl, VideoId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    /// Pre-sanitised rich text supplied by the uploader. Rendering is left to the caller.
    pub description: String,
    pub category: Category,
    pub location: String,
    pub media_url: MediaUrl,
    pub owner_id: UserId,
}

impl Video {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.id.created_at()
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }
}
