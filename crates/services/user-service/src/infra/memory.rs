//! In-process record store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::record::Record;
use super::store::{RecordStore, StoreResult};

/// Record store held in process memory, one map per table.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, HashMap<String, Record>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in a table
    pub async fn len(&self, table: &str) -> usize {
        self.tables
            .read()
            .await
            .get(table)
            .map(HashMap::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, table: &str, key: &str) -> StoreResult<Option<Record>> {
        let tables = self.tables.read().await;
        Ok(tables.get(table).and_then(|rows| rows.get(key)).cloned())
    }

    async fn scan(&self, table: &str) -> StoreResult<Vec<Record>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn put(&self, table: &str, key: &str, record: Record) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .entry(table.to_string())
            .or_default()
            .insert(key.to_string(), record);
        Ok(())
    }

    async fn delete(&self, table: &str, key: &str) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(rows) = tables.get_mut(table) {
            rows.remove(key);
        }
        Ok(())
    }
}
