use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DocumentStore, StoreError};

/// In-memory document store used by the test suite and local development.
/// Collections are created lazily on first insert.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<(Uuid, Value)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn created_at(doc: &Value) -> Option<DateTime<Utc>> {
    doc.get("createdAt")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        let mut docs: Vec<Value> = collections
            .get(collection)
            .map(|entries| entries.iter().map(|(_, doc)| doc.clone()).collect())
            .unwrap_or_default();

        // Newest first, matching the Postgres ORDER BY created_at DESC.
        // Documents without a parseable createdAt keep insertion order.
        docs.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
        Ok(docs)
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|entries| {
            entries
                .iter()
                .find(|(doc_id, _)| *doc_id == id)
                .map(|(_, doc)| doc.clone())
        }))
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|entries| {
            entries
                .iter()
                .find(|(_, doc)| doc.get(field).and_then(Value::as_str) == Some(value))
                .map(|(_, doc)| doc.clone())
        }))
    }

    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push((id, doc));
        Ok(())
    }

    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(entries) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match entries.iter_mut().find(|(doc_id, _)| *doc_id == id) {
            Some(entry) => {
                entry.1 = doc;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(entries) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = entries.len();
        entries.retain(|(doc_id, _)| *doc_id != id);
        Ok(entries.len() < before)
    }

    async fn count(&self, collection: &str) -> Result<i64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map(|e| e.len() as i64).unwrap_or(0))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
