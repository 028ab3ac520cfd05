// src/infrastructure/repositories/document_video.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::map_store;
use crate::application::ports::store::{Document, DocumentStore};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::domain::video::{
    Category, MediaUrl, Video, VideoId, VideoReadRepository, VideoWriteRepository,
};

pub const DEFAULT_VIDEO_COLLECTION: &str = "videos";

#[derive(Clone)]
pub struct DocumentVideoRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl DocumentVideoRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_collection(store, DEFAULT_VIDEO_COLLECTION)
    }

    pub fn with_collection(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }
}

/// Stored shape of a video. Every field the entity needs is required here;
/// `id` is optional because the document key already carries it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoDocument {
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    content: String,
    category: String,
    #[serde(default)]
    location: String,
    video_url: String,
    user_id: String,
}

fn decode(document: Document) -> DomainResult<Video> {
    let key = document.id;
    let raw: VideoDocument = serde_json::from_value(Value::Object(document.fields))
        .map_err(|err| DomainError::Malformed(format!("video {key}: {err}")))?;

    if let Some(embedded) = raw.id.as_deref().filter(|embedded| *embedded != key) {
        return Err(DomainError::Malformed(format!(
            "video {key}: embedded id {embedded} does not match its key"
        )));
    }

    let malformed = |err: DomainError| DomainError::Malformed(format!("video {key}: {err}"));
    Ok(Video {
        id: VideoId::new(key.clone()).map_err(malformed)?,
        title: raw.title,
        description: raw.content,
        category: Category::new(raw.category).map_err(malformed)?,
        location: raw.location,
        media_url: MediaUrl::new(raw.video_url).map_err(malformed)?,
        owner_id: UserId::new(raw.user_id).map_err(malformed)?,
    })
}

#[async_trait]
impl VideoReadRepository for DocumentVideoRepository {
    async fn find_by_id(&self, id: &VideoId) -> DomainResult<Option<Video>> {
        let document = self
            .store
            .get(&self.collection, id.as_str())
            .await
            .map_err(map_store)?;

        document.map(decode).transpose()
    }

    async fn list_by_category(
        &self,
        category: &Category,
        exclude: &VideoId,
    ) -> DomainResult<Vec<Video>> {
        let documents = self
            .store
            .find_by_field(
                &self.collection,
                "category",
                category.as_str(),
                Some(exclude.as_str()),
            )
            .await
            .map_err(map_store)?;

        let videos = documents
            .into_iter()
            .filter_map(|document| match decode(document) {
                Ok(video) => Some(video),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable video document");
                    None
                }
            })
            .collect();
        Ok(videos)
    }
}

#[async_trait]
impl VideoWriteRepository for DocumentVideoRepository {
    async fn delete(&self, id: &VideoId) -> DomainResult<()> {
        self.store
            .delete(&self.collection, id.as_str())
            .await
            .map_err(map_store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::InMemoryDocumentStore;
    use serde_json::json;

    fn repo_with(documents: &[(&str, Value)]) -> DocumentVideoRepository {
        let store = InMemoryDocumentStore::new();
        for (id, body) in documents {
            store.insert(DEFAULT_VIDEO_COLLECTION, id, body.clone());
        }
        DocumentVideoRepository::new(Arc::new(store))
    }

    fn body(id: &str, category: &str) -> Value {
        json!({
            "id": id,
            "title": "Waterfall",
            "content": "<p>spray</p>",
            "category": category,
            "location": "Iceland",
            "videoUrl": format!("https://cdn.example/{id}.mp4"),
            "userId": "u1",
        })
    }

    #[tokio::test]
    async fn decodes_a_complete_document() {
        let repo = repo_with(&[("1700000000000", body("1700000000000", "nature"))]);

        let video = repo
            .find_by_id(&VideoId::new("1700000000000").unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(video.title, "Waterfall");
        assert_eq!(video.description, "<p>spray</p>");
        assert_eq!(video.category.as_str(), "nature");
        assert_eq!(video.owner_id.as_str(), "u1");
    }

    #[tokio::test]
    async fn missing_document_is_none() {
        let repo = repo_with(&[]);
        let found = repo.find_by_id(&VideoId::new("1").unwrap()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn missing_required_field_is_malformed() {
        let repo = repo_with(&[("1", json!({ "title": "no category", "videoUrl": "u", "userId": "u1" }))]);

        let err = repo
            .find_by_id(&VideoId::new("1").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Malformed(_)));
    }

    #[tokio::test]
    async fn mismatched_embedded_id_is_malformed() {
        let repo = repo_with(&[("1", body("2", "nature"))]);

        let err = repo
            .find_by_id(&VideoId::new("1").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Malformed(_)));
    }

    #[tokio::test]
    async fn listing_skips_unreadable_documents() {
        let repo = repo_with(&[
            ("1", body("1", "nature")),
            ("2", body("2", "nature")),
            ("3", json!({ "category": "nature" })),
            ("4", body("4", "music")),
        ]);

        let videos = repo
            .list_by_category(
                &Category::new("nature").unwrap(),
                &VideoId::new("1").unwrap(),
            )
            .await
            .unwrap();

        let ids: Vec<_> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }
}
