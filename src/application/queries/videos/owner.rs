use super::VideoQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{UserId, UserProfile},
};

pub struct GetOwnerProfileQuery {
    pub user_id: UserId,
}

impl VideoQueryService {
    pub async fn get_owner(&self, query: GetOwnerProfileQuery) -> ApplicationResult<UserProfile> {
        let profile = self
            .user_repo
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("user {} not found", query.user_id))
            })?;
        Ok(profile)
    }
}
