// src/domain/user/entity.rs
use crate::domain::user::value_objects::UserId;

/// Public profile of an uploader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub display_name: String,
    pub avatar_url: Option<String>,
}
