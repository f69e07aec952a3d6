//! User repository over a key-value record store.
//!
//! Records are keyed by email. Create and update check for an existing record
//! and then write; the two steps are not atomic, so concurrent creates of the
//! same email can both pass the check and the later write wins. Closing that
//! window needs a conditional insert-if-absent primitive that `RecordStore`
//! does not offer.

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::User;

use crate::infra::record::{from_record, from_records, to_record};
use crate::infra::{RecordStore, StoreError};

/// User repository trait for dependency injection.
///
/// Every operation names its table explicitly; implementations hold no
/// per-table state.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by email.
    ///
    /// An absent key is not an error: the zero-valued user comes back and
    /// callers check `User::exists()`.
    async fn fetch(&self, email: &str, table: &str) -> AppResult<User>;

    /// Scan the whole table (unpaginated)
    async fn fetch_all(&self, table: &str) -> AppResult<Vec<User>>;

    /// Decode, validate and insert a user from a JSON request body
    async fn create(&self, body: &str, table: &str) -> AppResult<User>;

    /// Decode, validate and fully replace an existing user
    async fn update(&self, body: &str, table: &str) -> AppResult<User>;

    /// Delete by email; deleting an absent user succeeds
    async fn delete(&self, email: &str, table: &str) -> AppResult<()>;
}

/// Concrete implementation of UserRepository over an injected record store
pub struct UserStore {
    store: Arc<dyn RecordStore>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    async fn put_user(&self, user: &User, table: &str) -> AppResult<()> {
        let record = to_record(user).map_err(|e| {
            tracing::error!(email = %user.email, "Failed to marshal user: {}", e);
            AppError::Marshal
        })?;

        self.store
            .put(table, &user.email, record)
            .await
            .map_err(|e| {
                tracing::error!(table, email = %user.email, "Failed to put user record: {}", e);
                AppError::Write
            })
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn fetch(&self, email: &str, table: &str) -> AppResult<User> {
        tracing::debug!(table, email, "Fetching user");

        let record = self.store.get(table, email).await.map_err(|e| {
            tracing::error!(table, email, "Failed to fetch user record: {}", e);
            AppError::Fetch
        })?;

        from_record(&record.unwrap_or_default()).map_err(|e| {
            tracing::error!(table, email, "Failed to decode user record: {}", e);
            AppError::Fetch
        })
    }

    async fn fetch_all(&self, table: &str) -> AppResult<Vec<User>> {
        // A backend that cannot decode a stored item fails the scan with
        // `StoreError::Codec`; that is an undecodable item, not a read failure.
        let records = self.store.scan(table).await.map_err(|e| match e {
            StoreError::Codec(_) => {
                tracing::error!(table, "Failed to unmarshal stored user record: {}", e);
                AppError::Unmarshal
            }
            _ => {
                tracing::error!(table, "Failed to scan user records: {}", e);
                AppError::Fetch
            }
        })?;

        from_records(&records).map_err(|e| {
            tracing::error!(table, "Failed to unmarshal user records: {}", e);
            AppError::Unmarshal
        })
    }

    async fn create(&self, body: &str, table: &str) -> AppResult<User> {
        let user = User::from_request_body(body)?;

        // A failed lookup is treated as "no existing user" and create goes ahead.
        match self.fetch(&user.email, table).await {
            Ok(existing) if existing.exists() => return Err(AppError::DuplicateUser),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(table, email = %user.email, "Duplicate check failed, creating anyway: {}", e);
            }
        }

        self.put_user(&user, table).await?;
        tracing::info!(table, email = %user.email, "User created");

        Ok(user)
    }

    async fn update(&self, body: &str, table: &str) -> AppResult<User> {
        let user = User::from_request_body(body)?;

        let existing = self.fetch(&user.email, table).await?;
        if !existing.exists() {
            return Err(AppError::UserNotFound);
        }

        self.put_user(&user, table).await?;
        tracing::info!(table, email = %user.email, "User updated");

        Ok(user)
    }

    async fn delete(&self, email: &str, table: &str) -> AppResult<()> {
        self.store.delete(table, email).await.map_err(|e| {
            tracing::error!(table, email, "Failed to delete user record: {}", e);
            AppError::Delete
        })?;

        tracing::info!(table, email, "User deleted");
        Ok(())
    }
}
