// src/infrastructure/store/memory.rs
use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::store::{Document, DocumentStore, Fields, StoreResult};

type Collection = BTreeMap<String, Fields>;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `collection/id`. Non-object values are stored as an empty document.
    pub fn insert(&self, collection: &str, id: &str, value: Value) {
        let fields = match value {
            Value::Object(fields) => fields,
            _ => Fields::new(),
        };
        self.collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
    }

    pub fn contains(&self, collection: &str, id: &str) -> bool {
        self.collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(collection)
            .is_some_and(|docs| docs.contains_key(id))
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let guard = self.collections.read().unwrap_or_else(PoisonError::into_inner);
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Vec<Document>> {
        let guard = self.collections.read().unwrap_or_else(PoisonError::into_inner);
        let Some(docs) = guard.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .filter(|(id, _)| exclude_id != Some(id.as_str()))
            .filter(|(_, fields)| fields.get(field).and_then(Value::as_str) == Some(value))
            .map(|(id, fields)| Document::new(id.as_str(), fields.clone()))
            .collect())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        if let Some(docs) = self
            .collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(collection)
        {
            docs.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn find_by_field_filters_and_excludes() {
        let store = InMemoryDocumentStore::new();
        store.insert("videos", "1", json!({ "category": "nature" }));
        store.insert("videos", "2", json!({ "category": "nature" }));
        store.insert("videos", "3", json!({ "category": "music" }));

        let docs = store
            .find_by_field("videos", "category", "nature", Some("1"))
            .await
            .unwrap();

        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryDocumentStore::new();
        store.insert("videos", "1", json!({}));

        store.delete("videos", "1").await.unwrap();
        store.delete("videos", "1").await.unwrap();
        store.delete("nowhere", "1").await.unwrap();

        assert!(!store.contains("videos", "1"));
        assert!(store.get("videos", "1").await.unwrap().is_none());
    }
}
