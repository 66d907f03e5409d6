use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::{DocumentStore, StoreError};

/// Typed view over one collection of the document store. Handlers go through
/// a repository rather than the raw store so documents round-trip through
/// their serde models.
pub struct Repository<T> {
    collection: &'static str,
    store: Arc<dyn DocumentStore>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(collection: &'static str, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            collection,
            store,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_any(&self) -> Result<Vec<T>, StoreError> {
        let docs = self.store.list(self.collection).await?;
        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }

    pub async fn select_one(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let doc = self.store.get(self.collection, id).await?;
        doc.map(|d| serde_json::from_value(d).map_err(StoreError::from))
            .transpose()
    }

    pub async fn select_404(&self, id: Uuid) -> Result<T, StoreError> {
        match self.select_one(id).await? {
            Some(item) => Ok(item),
            None => Err(StoreError::NotFound("Record not found".to_string())),
        }
    }

    pub async fn select_by_field(&self, field: &str, value: &str) -> Result<Option<T>, StoreError> {
        let doc = self.store.find_by_field(self.collection, field, value).await?;
        doc.map(|d| serde_json::from_value(d).map_err(StoreError::from))
            .transpose()
    }

    pub async fn insert(&self, id: Uuid, item: &T) -> Result<(), StoreError> {
        let doc = serde_json::to_value(item)?;
        self.store.insert(self.collection, id, doc).await
    }

    pub async fn update(&self, id: Uuid, item: &T) -> Result<bool, StoreError> {
        let doc = serde_json::to_value(item)?;
        self.store.replace(self.collection, id, doc).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.store.delete(self.collection, id).await
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        self.store.count(self.collection).await
    }
}
