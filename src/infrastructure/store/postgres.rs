// src/infrastructure/store/postgres.rs
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool, types::Json};

use crate::application::ports::store::{Document, DocumentStore, StoreError, StoreResult};

const INSUFFICIENT_PRIVILEGE: &str = "42501";

/// Documents kept as JSONB rows in the `documents` table.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    body: Json<Value>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = StoreError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        match row.body.0 {
            Value::Object(fields) => Ok(Document::new(row.id, fields)),
            _ => Err(StoreError::Backend(format!(
                "document {} is not a JSON object",
                row.id
            ))),
        }
    }
}

fn map_sqlx(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(INSUFFICIENT_PRIVILEGE) =>
        {
            StoreError::Forbidden(db_err.message().to_string())
        }
        _ => StoreError::Backend(err.to_string()),
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Document::try_from).transpose()
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Vec<Document>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body FROM documents
             WHERE collection = $1
               AND body ->> $2 = $3
               AND ($4::text IS NULL OR id <> $4)
             ORDER BY id DESC",
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Document::try_from).collect()
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
