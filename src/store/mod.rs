pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use repository::Repository;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Errors from the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Storage seam for JSON documents grouped into named collections.
/// Every operation is atomic at the single-document level; no handler
/// touches more than one document per request.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in a collection, newest first.
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError>;

    /// First document whose top-level string field equals `value`
    /// (slug and username lookups).
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, StoreError>;

    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> Result<(), StoreError>;

    /// Replace an existing document wholesale. Returns false when absent.
    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> Result<bool, StoreError>;

    /// Returns false when the id was already absent.
    async fn delete(&self, collection: &str, id: Uuid) -> Result<bool, StoreError>;

    async fn count(&self, collection: &str) -> Result<i64, StoreError>;

    /// Liveness probe used by /api/health.
    async fn ping(&self) -> Result<(), StoreError>;
}
