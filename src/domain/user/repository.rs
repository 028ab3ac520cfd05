use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::UserProfile, value_objects::UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<UserProfile>>;
}
