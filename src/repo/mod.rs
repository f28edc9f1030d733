/// Storage for accepted user requests
use crate::errors::ApiResult;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Key-value store of accepted requests, keyed by external id
#[async_trait]
pub trait RequestStore: Send + Sync {
    async fn get(&self, external_id: &str) -> ApiResult<Option<Value>>;

    /// Insert or replace the request stored under `external_id`
    async fn put(&self, external_id: &str, payload: Value) -> ApiResult<()>;

    /// Returns false when nothing was stored under `external_id`
    async fn delete(&self, external_id: &str) -> ApiResult<bool>;

    async fn list(&self) -> ApiResult<Vec<Value>>;
}

/// Process-local store
#[derive(Default)]
pub struct MemoryStore {
    requests: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequestStore for MemoryStore {
    async fn get(&self, external_id: &str) -> ApiResult<Option<Value>> {
        Ok(self.requests.read().await.get(external_id).cloned())
    }

    async fn put(&self, external_id: &str, payload: Value) -> ApiResult<()> {
        self.requests
            .write()
            .await
            .insert(external_id.to_string(), payload);
        Ok(())
    }

    async fn delete(&self, external_id: &str) -> ApiResult<bool> {
        Ok(self.requests.write().await.remove(external_id).is_some())
    }

    async fn list(&self) -> ApiResult<Vec<Value>> {
        Ok(self.requests.read().await.values().cloned().collect())
    }
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PgRequestStore {
    pool: PgPool,
}

impl PgRequestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestStore for PgRequestStore {
    async fn get(&self, external_id: &str) -> ApiResult<Option<Value>> {
        let row = sqlx::query_as::<_, (Value,)>(
            "SELECT payload FROM user_requests WHERE external_id = $1",
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(payload,)| payload))
    }

    async fn put(&self, external_id: &str, payload: Value) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO user_requests(external_id, payload)
             VALUES ($1, $2)
             ON CONFLICT (external_id) DO UPDATE
             SET payload = EXCLUDED.payload, stored_at = now()",
        )
        .bind(external_id)
        .bind(payload)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, external_id: &str) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM user_requests WHERE external_id = $1")
            .bind(external_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> ApiResult<Vec<Value>> {
        let rows = sqlx::query_as::<_, (Value,)>(
            "SELECT payload FROM user_requests ORDER BY stored_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(payload,)| payload).collect())
    }
}

/// Initialize database tables
pub async fn init_db(pool: &PgPool) -> ApiResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS user_requests(
            external_id TEXT PRIMARY KEY,
            payload JSONB NOT NULL,
            stored_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
