//! Infrastructure layer - record store backends.

mod memory;
pub mod record;
mod redis_store;
mod store;

use std::sync::Arc;

use common::{StoreBackend, StoreConfig};

pub use memory::MemoryStore;
pub use record::{AttributeValue, CodecError, Record};
pub use redis_store::RedisStore;
pub use store::{RecordStore, StoreError, StoreResult};

#[cfg(any(test, feature = "test-utils"))]
pub use store::MockRecordStore;

/// Build the record store selected by configuration.
pub async fn connect_store(config: &StoreConfig) -> StoreResult<Arc<dyn RecordStore>> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory record store; records are lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Redis => Ok(Arc::new(RedisStore::connect(&config.url).await?)),
    }
}
