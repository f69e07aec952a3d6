//! User service configuration.

use std::env;
use std::fmt;

use common::{StoreBackend, StoreConfig};

/// User service configuration.
#[derive(Clone, Default)]
pub struct UserServiceConfig {
    /// Record store selection and location
    pub store: StoreConfig,
}

impl fmt::Debug for UserServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserServiceConfig")
            .field("backend", &self.store.backend)
            .field("url", &"[REDACTED]")
            .field("table_name", &self.store.table_name)
            .finish()
    }
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = StoreConfig::default();

        let backend = env::var("USER_SERVICE_STORE_BACKEND")
            .or_else(|_| env::var("STORE_BACKEND"))
            .ok()
            .and_then(|b| match b.parse::<StoreBackend>() {
                Ok(backend) => Some(backend),
                Err(e) => {
                    tracing::warn!("{}, falling back to {}", e, defaults.backend);
                    None
                }
            })
            .unwrap_or(defaults.backend);

        Self {
            store: StoreConfig {
                backend,
                url: env::var("USER_SERVICE_REDIS_URL")
                    .or_else(|_| env::var("REDIS_URL"))
                    .unwrap_or(defaults.url),
                table_name: env::var("USER_SERVICE_TABLE_NAME")
                    .or_else(|_| env::var("TABLE_NAME"))
                    .unwrap_or(defaults.table_name),
            },
        }
    }
}
