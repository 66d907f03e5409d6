use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use uuid::Uuid;

use super::{DocumentStore, StoreError};
use crate::config;

/// Postgres-backed document store. Each resource lives as a JSONB document
/// in a single `documents` table keyed by (collection, id).
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect using DATABASE_URL and ensure the documents table exists.
    pub async fn connect() -> Result<Self, StoreError> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| StoreError::Connection("DATABASE_URL is not set".to_string()))?;

        let db = &config::config().database;
        let pool = PgPoolOptions::new()
            .max_connections(db.max_connections)
            .acquire_timeout(Duration::from_secs(db.connection_timeout))
            .connect(&url)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection  TEXT        NOT NULL,
                id          UUID        NOT NULL,
                data        JSONB       NOT NULL,
                created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                PRIMARY KEY (collection, id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn doc_created_at(doc: &Value) -> Option<DateTime<Utc>> {
    doc.get("createdAt")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let rows = sqlx::query("SELECT data FROM documents WHERE collection = $1 ORDER BY created_at DESC")
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<Value, _>("data").map_err(StoreError::from))
            .collect()
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError> {
        let row = sqlx::query("SELECT data FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.try_get::<Value, _>("data").map_err(StoreError::from))
            .transpose()
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, StoreError> {
        let row = sqlx::query(
            "SELECT data FROM documents WHERE collection = $1 AND data->>$2 = $3 LIMIT 1",
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.try_get::<Value, _>("data").map_err(StoreError::from))
            .transpose()
    }

    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> Result<(), StoreError> {
        let created = doc_created_at(&doc);
        sqlx::query(
            "INSERT INTO documents (collection, id, data, created_at) VALUES ($1, $2, $3, COALESCE($4, now()))",
        )
        .bind(collection)
        .bind(id)
        .bind(doc)
        .bind(created)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE documents SET data = $3 WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .bind(doc)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, collection: &str) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
