// tests/support/mocks/store.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Semaphore;
use video_detail_core::application::ports::store::{
    Document, DocumentStore, StoreError, StoreResult,
};
use video_detail_core::infrastructure::store::InMemoryDocumentStore;

/// In-memory store whose calls can be held back, failed or made sloppy.
///
/// Call keys look like `get:videos/42`, `find:videos/category=nature` and
/// `delete:videos/42`.
#[derive(Default)]
pub struct GatedDocumentStore {
    inner: InMemoryDocumentStore,
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
    failures: Mutex<HashMap<String, StoreError>>,
    calls: Mutex<Vec<String>>,
    ignore_exclusion: AtomicBool,
}

impl GatedDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, collection: &str, id: &str, value: Value) {
        self.inner.insert(collection, id, value);
    }

    pub fn contains(&self, collection: &str, id: &str) -> bool {
        self.inner.contains(collection, id)
    }

    /// Holds the next call for `key` until `release` is called.
    pub fn gate(&self, key: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), Arc::new(Semaphore::new(0)));
    }

    pub fn release(&self, key: &str) {
        let gates = self.gates.lock().unwrap();
        let gate = gates
            .get(key)
            .unwrap_or_else(|| panic!("no gate installed for {key}"));
        gate.add_permits(1);
    }

    pub fn fail(&self, key: &str, err: StoreError) {
        self.failures.lock().unwrap().insert(key.to_string(), err);
    }

    pub fn clear_failure(&self, key: &str) {
        self.failures.lock().unwrap().remove(key);
    }

    /// Make `find_by_field` ignore its exclusion argument, like a careless backend.
    pub fn ignore_exclusion(&self) {
        self.ignore_exclusion.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, key: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|call| call == key)
    }

    pub async fn wait_for_call(&self, key: &str) {
        for _ in 0..1_000 {
            if self.was_called(key) {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("store call {key} never happened; saw {:?}", self.calls());
    }

    async fn pass(&self, key: String) -> StoreResult<()> {
        self.calls.lock().unwrap().push(key.clone());

        let gate = self.gates.lock().unwrap().get(&key).cloned();
        if let Some(gate) = gate {
            gate.acquire()
                .await
                .expect("gate semaphore closed")
                .forget();
        }

        match self.failures.lock().unwrap().get(&key) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for GatedDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        self.pass(format!("get:{collection}/{id}")).await?;
        self.inner.get(collection, id).await
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Vec<Document>> {
        self.pass(format!("find:{collection}/{field}={value}")).await?;
        let exclude_id = if self.ignore_exclusion.load(Ordering::SeqCst) {
            None
        } else {
            exclude_id
        };
        self.inner
            .find_by_field(collection, field, value, exclude_id)
            .await
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        self.pass(format!("delete:{collection}/{id}")).await?;
        self.inner.delete(collection, id).await
    }
}

/// Lets spawned tasks run until they block again.
pub async fn settle() {
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
}
