use crate::domain::errors::DomainResult;
use crate::domain::video::entity::Video;
use crate::domain::video::value_objects::{Category, VideoId};
use async_trait::async_trait;

#[async_trait]
pub trait VideoReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &VideoId) -> DomainResult<Option<Video>>;

    /// Videos tagged with `category`, leaving out `exclude`. An empty result is not an error.
    async fn list_by_category(
        &self,
        category: &Category,
        exclude: &VideoId,
    ) -> DomainResult<Vec<Video>>;
}

#[async_trait]
pub trait VideoWriteRepository: Send + Sync {
    async fn delete(&self, id: &VideoId) -> DomainResult<()>;
}
