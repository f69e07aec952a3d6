//! User repository tests against the in-memory record store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Barrier;

use common::AppError;
use domain::User;
use user_service_lib::infra::{MemoryStore, Record, RecordStore, StoreResult};
use user_service_lib::repository::{UserRepository, UserStore};

const TABLE: &str = "users";

fn body(email: &str, first_name: &str, last_name: &str) -> String {
    serde_json::to_string(&User::new(email, first_name, last_name)).unwrap()
}

fn setup() -> (Arc<MemoryStore>, UserStore) {
    let store = Arc::new(MemoryStore::new());
    let repo = UserStore::new(store.clone());
    (store, repo)
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let (_, repo) = setup();

    let created = repo.create(&body("a@b.com", "A", "B"), TABLE).await.unwrap();
    let fetched = repo.fetch("a@b.com", TABLE).await.unwrap();

    assert_eq!(created, User::new("a@b.com", "A", "B"));
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_fetch_missing_returns_zero_user() {
    let (_, repo) = setup();

    let user = repo.fetch("nobody@b.com", TABLE).await.unwrap();

    assert!(!user.exists());
    assert_eq!(user, User::default());
}

#[tokio::test]
async fn test_fetch_all_empty_table() {
    let (_, repo) = setup();

    let users = repo.fetch_all(TABLE).await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_fetch_all_returns_every_user() {
    let (_, repo) = setup();
    repo.create(&body("a@b.com", "A", "B"), TABLE).await.unwrap();
    repo.create(&body("c@d.org", "C", "D"), TABLE).await.unwrap();

    let mut users = repo.fetch_all(TABLE).await.unwrap();
    users.sort_by(|a, b| a.email.cmp(&b.email));

    assert_eq!(
        users,
        vec![User::new("a@b.com", "A", "B"), User::new("c@d.org", "C", "D")]
    );
}

#[tokio::test]
async fn test_fetch_all_undecodable_item() {
    let (store, repo) = setup();
    repo.create(&body("a@b.com", "A", "B"), TABLE).await.unwrap();

    let mut bad = Record::new();
    bad.insert(
        "email".to_string(),
        user_service_lib::infra::AttributeValue::Bool(false),
    );
    store.put(TABLE, "broken", bad).await.unwrap();

    let result = repo.fetch_all(TABLE).await;
    assert_eq!(result, Err(AppError::Unmarshal));
}

#[tokio::test]
async fn test_create_duplicate_rejected() {
    let (store, repo) = setup();
    repo.create(&body("a@b.com", "A", "B"), TABLE).await.unwrap();

    let result = repo.create(&body("a@b.com", "Other", "Person"), TABLE).await;

    assert_eq!(result, Err(AppError::DuplicateUser));
    assert_eq!(store.len(TABLE).await, 1);
    let kept = repo.fetch("a@b.com", TABLE).await.unwrap();
    assert_eq!(kept.first_name, "A");
}

#[tokio::test]
async fn test_invalid_email_rejected_before_write() {
    let (store, repo) = setup();
    let bad = body("not-an-email", "A", "B");

    assert_eq!(repo.create(&bad, TABLE).await, Err(AppError::InvalidEmail));
    assert_eq!(repo.update(&bad, TABLE).await, Err(AppError::InvalidEmail));
    assert_eq!(store.len(TABLE).await, 0);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let (store, repo) = setup();

    assert_eq!(repo.create("not json", TABLE).await, Err(AppError::InvalidData));
    assert_eq!(repo.update("[1, 2]", TABLE).await, Err(AppError::InvalidData));
    assert_eq!(store.len(TABLE).await, 0);
}

#[tokio::test]
async fn test_array_body_rejected_before_write() {
    let (store, repo) = setup();
    let positional = r#"["a@b.com","A","B"]"#;

    assert_eq!(repo.create(positional, TABLE).await, Err(AppError::InvalidData));
    assert_eq!(repo.update(positional, TABLE).await, Err(AppError::InvalidData));
    assert_eq!(store.len(TABLE).await, 0);
}

#[tokio::test]
async fn test_null_names_stored_as_empty() {
    let (_, repo) = setup();

    let created = repo
        .create(r#"{"email":"c@d.com","firstName":null}"#, TABLE)
        .await
        .unwrap();

    assert_eq!(created, User::new("c@d.com", "", ""));
    assert_eq!(repo.fetch("c@d.com", TABLE).await.unwrap(), created);
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let (_, repo) = setup();
    repo.create(&body("a@b.com", "A", "B"), TABLE).await.unwrap();

    let updated = repo
        .update(r#"{"email":"a@b.com","firstName":"New"}"#, TABLE)
        .await
        .unwrap();
    let fetched = repo.fetch("a@b.com", TABLE).await.unwrap();

    assert_eq!(updated, User::new("a@b.com", "New", ""));
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_user_does_not_create() {
    let (store, repo) = setup();

    let result = repo.update(&body("a@b.com", "A", "B"), TABLE).await;

    assert_eq!(result, Err(AppError::UserNotFound));
    assert_eq!(store.len(TABLE).await, 0);
}

#[tokio::test]
async fn test_delete_twice_succeeds() {
    let (store, repo) = setup();
    repo.create(&body("a@b.com", "A", "B"), TABLE).await.unwrap();

    assert!(repo.delete("a@b.com", TABLE).await.is_ok());
    assert_eq!(store.len(TABLE).await, 0);
    assert!(!repo.fetch("a@b.com", TABLE).await.unwrap().exists());

    assert!(repo.delete("a@b.com", TABLE).await.is_ok());
}

#[tokio::test]
async fn test_tables_do_not_share_records() {
    let (_, repo) = setup();
    repo.create(&body("a@b.com", "A", "B"), TABLE).await.unwrap();

    assert!(repo.create(&body("a@b.com", "A", "B"), "archive").await.is_ok());
    assert_eq!(repo.fetch_all("archive").await.unwrap().len(), 1);
}

// =============================================================================
// Check-then-act race
// =============================================================================

/// Store whose lookups all wait for each other before returning, so every
/// concurrent caller observes the state from before anyone wrote.
struct LockstepStore {
    inner: MemoryStore,
    barrier: Barrier,
}

#[async_trait]
impl RecordStore for LockstepStore {
    async fn get(&self, table: &str, key: &str) -> StoreResult<Option<Record>> {
        let found = self.inner.get(table, key).await;
        self.barrier.wait().await;
        found
    }

    async fn scan(&self, table: &str) -> StoreResult<Vec<Record>> {
        self.inner.scan(table).await
    }

    async fn put(&self, table: &str, key: &str, record: Record) -> StoreResult<()> {
        self.inner.put(table, key, record).await
    }

    async fn delete(&self, table: &str, key: &str) -> StoreResult<()> {
        self.inner.delete(table, key).await
    }
}

#[tokio::test]
async fn test_concurrent_creates_both_pass_duplicate_check() {
    let store = Arc::new(LockstepStore {
        inner: MemoryStore::new(),
        barrier: Barrier::new(2),
    });
    let repo = UserStore::new(store.clone());

    let first_body = body("a@b.com", "First", "Writer");
    let second_body = body("a@b.com", "Second", "Writer");
    let (first, second) = tokio::join!(
        repo.create(&first_body, TABLE),
        repo.create(&second_body, TABLE),
    );

    // Neither create sees the other: no DuplicateUser, one record survives.
    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(store.inner.len(TABLE).await, 1);
}
