//! PostgreSQL repository implementations with connection pooling

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::domain::cache::{CacheAddress, CacheEntry, CacheRepository};
use crate::domain::query_log::{QueryLogEntry, QueryLogRepository};
use crate::domain::{DomainError, TopicItem};

const CACHE_TABLE: &str = "ns_queries";
const QUERY_LOG_TABLE: &str = "ns_query_log";

/// PostgreSQL connection configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            connect_timeout_secs: 30,
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Opens a connection pool against the configured database.
    pub async fn connect(&self) -> Result<PgPool, DomainError> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(self.connect_timeout_secs))
            .connect(&self.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
    }
}

/// Cache repository backed by a Postgres table keyed by content address.
///
/// `upsert` uses `INSERT ... ON CONFLICT DO UPDATE` so concurrent writes to
/// the same address resolve to a single consistent winner at the storage
/// layer, without a read-modify-write cycle.
#[derive(Debug, Clone)]
pub struct PostgresCacheRepository {
    pool: PgPool,
}

impl PostgresCacheRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensures the cache table exists.
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                address VARCHAR(64) PRIMARY KEY,
                prompt TEXT NOT NULL,
                items JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
            CACHE_TABLE
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create cache table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl CacheRepository for PostgresCacheRepository {
    async fn find(&self, address: &CacheAddress) -> Result<Option<CacheEntry>, DomainError> {
        let query = format!(
            "SELECT prompt, items, created_at FROM {} WHERE address = $1",
            CACHE_TABLE
        );

        let result = sqlx::query(&query)
            .bind(address.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to look up cache entry: {}", e)))?;

        match result {
            Some(row) => {
                let prompt: String = row.get("prompt");
                let items: serde_json::Value = row.get("items");
                let created_at: DateTime<Utc> = row.get("created_at");

                let items: Vec<TopicItem> = serde_json::from_value(items).map_err(|e| {
                    DomainError::storage(format!("Failed to deserialize cached items: {}", e))
                })?;

                Ok(Some(CacheEntry {
                    address: address.clone(),
                    prompt,
                    items,
                    created_at,
                }))
            }
            None => Ok(None),
        }
    }

    async fn upsert(&self, entry: CacheEntry) -> Result<(), DomainError> {
        let items = serde_json::to_value(&entry.items).map_err(|e| {
            DomainError::storage(format!("Failed to serialize cache entry: {}", e))
        })?;

        let query = format!(
            r#"
            INSERT INTO {} (address, prompt, items, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (address) DO UPDATE
            SET prompt = EXCLUDED.prompt,
                items = EXCLUDED.items,
                created_at = EXCLUDED.created_at
            "#,
            CACHE_TABLE
        );

        sqlx::query(&query)
            .bind(entry.address.as_str())
            .bind(&entry.prompt)
            .bind(&items)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to upsert cache entry: {}", e)))?;

        Ok(())
    }
}

/// Append-only query log backed by a Postgres table.
#[derive(Debug, Clone)]
pub struct PostgresQueryLogRepository {
    pool: PgPool,
}

impl PostgresQueryLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensures the query log table exists.
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
                address VARCHAR(64) NOT NULL,
                queried_at TIMESTAMPTZ NOT NULL
            )
            "#,
            QUERY_LOG_TABLE
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to create query log table: {}", e))
            })?;

        Ok(())
    }
}

#[async_trait]
impl QueryLogRepository for PostgresQueryLogRepository {
    async fn append(&self, entry: QueryLogEntry) -> Result<(), DomainError> {
        let query = format!(
            "INSERT INTO {} (address, queried_at) VALUES ($1, $2)",
            QUERY_LOG_TABLE
        );

        sqlx::query(&query)
            .bind(entry.address.as_str())
            .bind(entry.timestamp)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to append query log: {}", e)))?;

        Ok(())
    }
}
