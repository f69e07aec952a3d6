//! User Service Library
//!
//! This crate provides create/read/update/delete of user records kept in a
//! key-value record store. The store is injected; the table is named per call.

pub mod config;
pub mod infra;
pub mod repository;
pub mod request;

use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::infra::{connect_store, StoreResult};
use crate::repository::UserStore;

/// Connect the configured record store and wrap it in a repository.
pub async fn build_repository(config: &UserServiceConfig) -> StoreResult<Arc<UserStore>> {
    let store = connect_store(&config.store).await?;
    info!(
        backend = %config.store.backend,
        table = %config.store.table_name,
        "User repository ready"
    );

    Ok(Arc::new(UserStore::new(store)))
}
