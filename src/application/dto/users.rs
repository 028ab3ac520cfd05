use crate::domain::user::UserProfile;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileDto {
    pub id: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl From<UserProfile> for UserProfileDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.into_inner(),
            display_name: profile.display_name,
            avatar_url: profile.avatar_url,
        }
    }
}
