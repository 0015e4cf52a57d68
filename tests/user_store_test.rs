//! Store contract tests.
//!
//! These tests exercise the `UserRepository` contract through an in-memory
//! implementation, so they run without a database connection. The service
//! layer is driven on top of the same implementation.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_test::assert_ok;
use validator::Validate;

use user_directory::{AppError, AppResult, User, UserDraft, UserRepository};
use user_directory::{UserManager, UserService};

// =============================================================================
// In-memory store
// =============================================================================

/// Backend-agnostic stand-in for the relational store.
struct InMemoryUserStore {
    records: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, draft: UserDraft) -> AppResult<User> {
        draft.validate().map_err(AppError::from)?;

        let mut records = self.records.lock().unwrap();
        match draft.id {
            None => {
                let user = User {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst),
                    email: draft.email,
                    password: draft.password,
                    name: draft.name,
                    picture: draft.picture,
                };
                records.push(user.clone());
                Ok(user)
            }
            Some(id) => {
                let slot = records
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or(AppError::NotFound)?;
                slot.email = draft.email;
                slot.password = draft.password;
                slot.name = draft.name;
                slot.picture = draft.picture;
                Ok(slot.clone())
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let records = self.records.lock().unwrap();
        Ok(records.clone())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let mut records = self.records.lock().unwrap();
        records.retain(|u| u.id != id);
        Ok(())
    }
}

// =============================================================================
// Store contract
// =============================================================================

#[tokio::test]
async fn saved_user_round_trips_through_find_by_id() {
    let store = InMemoryUserStore::new();

    let saved = assert_ok!(store.save(UserDraft::new("a@x.com", "Ann")).await);
    assert_eq!(saved.id, 1);

    let found = store.find_by_id(saved.id).await.unwrap();
    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn save_assigns_fresh_ids_in_sequence() {
    let store = InMemoryUserStore::new();

    let first = store.save(UserDraft::new("one@x.com", "One")).await.unwrap();
    let second = store.save(UserDraft::new("two@x.com", "Two")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn save_without_email_is_rejected_and_store_unchanged() {
    let store = InMemoryUserStore::new();

    let err = store.save(UserDraft::new("", "Ann")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_without_name_is_rejected_and_store_unchanged() {
    let store = InMemoryUserStore::new();

    let err = store.save(UserDraft::new("a@x.com", "")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn find_by_id_on_missing_id_is_empty_not_an_error() {
    let store = InMemoryUserStore::new();

    let found = assert_ok!(store.find_by_id(42).await);
    assert_eq!(found, None);
}

#[tokio::test]
async fn delete_by_id_removes_the_record() {
    let store = InMemoryUserStore::new();
    let saved = store.save(UserDraft::new("a@x.com", "Ann")).await.unwrap();

    assert_ok!(store.delete_by_id(saved.id).await);
    assert_eq!(store.find_by_id(saved.id).await.unwrap(), None);
}

#[tokio::test]
async fn delete_by_id_on_missing_id_is_a_no_op() {
    let store = InMemoryUserStore::new();

    assert_ok!(store.delete_by_id(42).await);
}

#[tokio::test]
async fn save_with_existing_id_replaces_field_values() {
    let store = InMemoryUserStore::new();
    let saved = store.save(UserDraft::new("a@x.com", "Ann")).await.unwrap();

    let mut draft = UserDraft::from(saved.clone());
    draft.name = "Ann Updated".to_string();
    draft.picture = Some("https://cdn.example.com/ann.png".to_string());
    let updated = store.save(draft).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.name, "Ann Updated");
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn save_with_unknown_id_is_not_found() {
    let store = InMemoryUserStore::new();

    let mut draft = UserDraft::new("a@x.com", "Ann");
    draft.id = Some(99);
    let err = store.save(draft).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound));
}

// =============================================================================
// Listing service over the store
// =============================================================================

#[tokio::test]
async fn list_users_returns_exactly_the_persisted_set() {
    let store = Arc::new(InMemoryUserStore::new());
    let service = UserManager::new(store.clone());

    assert!(service.list_users().await.unwrap().is_empty());

    for (email, name) in [("one@x.com", "One"), ("two@x.com", "Two"), ("three@x.com", "Three")] {
        store.save(UserDraft::new(email, name)).await.unwrap();
    }

    let users = service.list_users().await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users, store.find_all().await.unwrap());
}

#[tokio::test]
async fn full_lifecycle_of_a_single_user() {
    let store = Arc::new(InMemoryUserStore::new());
    let service = UserManager::new(store.clone());

    let saved = store.save(UserDraft::new("a@x.com", "Ann")).await.unwrap();
    assert_eq!(saved.id, 1);
    assert_eq!(saved.password, None);
    assert_eq!(saved.picture, None);

    let found = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(found, saved);

    let listed = service.list_users().await.unwrap();
    assert_eq!(listed, vec![saved]);

    store.delete_by_id(1).await.unwrap();
    assert!(service.list_users().await.unwrap().is_empty());
}
