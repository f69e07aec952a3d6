//! Record store abstraction.

use async_trait::async_trait;
use thiserror::Error;

use super::record::Record;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Failures talking to a record store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored record is not valid JSON: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        StoreError::Unavailable(msg.into())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value record store addressed by table name and primary key.
///
/// `get` returns `None` for an absent key and `delete` of an absent key
/// succeeds. No operation offers a conditional write.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the record stored under `key`
    async fn get(&self, table: &str, key: &str) -> StoreResult<Option<Record>>;

    /// Return every record in the table, unpaginated
    async fn scan(&self, table: &str) -> StoreResult<Vec<Record>>;

    /// Insert or fully replace the record stored under `key`
    async fn put(&self, table: &str, key: &str, record: Record) -> StoreResult<()>;

    /// Remove the record stored under `key`
    async fn delete(&self, table: &str, key: &str) -> StoreResult<()>;
}
