use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::map_store;
use crate::application::ports::store::{Document, DocumentStore};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, UserProfile, UserProfileRepository};

pub const DEFAULT_USER_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct DocumentUserProfileRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl DocumentUserProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_collection(store, DEFAULT_USER_COLLECTION)
    }

    pub fn with_collection(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserDocument {
    #[serde(default)]
    uid: Option<String>,
    #[serde(rename = "displayName")]
    display_name: String,
    #[serde(rename = "photoURL", default)]
    photo_url: Option<String>,
}

fn decode(document: Document) -> DomainResult<UserProfile> {
    let key = document.id;
    let raw: UserDocument = serde_json::from_value(Value::Object(document.fields))
        .map_err(|err| DomainError::Malformed(format!("user {key}: {err}")))?;

    if raw.uid.as_deref().is_some_and(|uid| uid != key) {
        return Err(DomainError::Malformed(format!(
            "user {key}: uid does not match its key"
        )));
    }

    Ok(UserProfile {
        id: UserId::new(key.clone())
            .map_err(|err| DomainError::Malformed(format!("user {key}: {err}")))?,
        display_name: raw.display_name,
        avatar_url: raw.photo_url.filter(|url| !url.trim().is_empty()),
    })
}

#[async_trait]
impl UserProfileRepository for DocumentUserProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<UserProfile>> {
        let document = self
            .store
            .get(&self.collection, id.as_str())
            .await
            .map_err(map_store)?;

        document.map(decode).transpose()
    }
}
