//! Redis-backed record store.
//!
//! Each table is a Redis hash: the primary key is the hash field and the
//! record is stored as its JSON encoding.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};

use super::record::Record;
use super::store::{RecordStore, StoreResult};

/// Redis record store with a shared connection manager.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let client = Client::open(url)?;
        let connection = ConnectionManager::new(client).await?;

        tracing::info!("Redis record store connected");

        Ok(Self { connection })
    }
}

#[async_trait]
impl RecordStore for RedisStore {
    async fn get(&self, table: &str, key: &str) -> StoreResult<Option<Record>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.hget(table, key).await?;

        match value {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn scan(&self, table: &str) -> StoreResult<Vec<Record>> {
        let mut conn = self.connection.clone();
        let values: Vec<String> = conn.hvals(table).await?;

        let records = values
            .iter()
            .map(|json| serde_json::from_str(json))
            .collect::<Result<Vec<Record>, _>>()?;
        Ok(records)
    }

    async fn put(&self, table: &str, key: &str, record: Record) -> StoreResult<()> {
        let mut conn = self.connection.clone();
        let json = serde_json::to_string(&record)?;

        conn.hset::<_, _, _, ()>(table, key, json).await?;
        Ok(())
    }

    async fn delete(&self, table: &str, key: &str) -> StoreResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.hdel(table, key).await?;
        Ok(())
    }
}
