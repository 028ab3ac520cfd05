// src/application/ports/store.rs
use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub type Fields = Map<String, Value>;

/// A raw document as the store hands it out: a key plus untyped fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("permission denied: {0}")]
    Forbidden(String),
    #[error("backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key/value document store. No transactional guarantee spans two calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Documents whose string field `field` equals `value`, leaving out the
    /// document keyed `exclude_id` when one is given.
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Vec<Document>>;

    /// Removing a key that does not exist succeeds.
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;
}
