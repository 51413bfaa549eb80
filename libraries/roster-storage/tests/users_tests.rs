//! Integration tests for the users vertical slice
//!
//! Tests user operations including:
//! - CRUD round trips against a real SQLite file
//! - Email uniqueness
//! - Not-found signalling for update and delete


use roster_core::{
    types::{CreateUser, UpdateUser},
    RosterError, UserStore,
};
use roster_storage::{users, SqliteUserStore};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = users::create(pool, CreateUser::new("Ana", "ana@x.com", Some(12345)))
        .await
        .expect("Failed to create user");

    assert!(user.id > 0);
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");
    assert_eq!(user.phone, Some(12345));

    let retrieved = users::get_by_id(pool, user.id).await.unwrap().unwrap();
    assert_eq!(retrieved, user);
}

#[tokio::test]
async fn test_create_without_phone_stores_null() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Bo", "bo@x.com").await;
    let retrieved = users::get_by_id(pool, user.id).await.unwrap().unwrap();

    assert_eq!(retrieved.phone, None);
}

#[tokio::test]
async fn test_get_missing_user_returns_none() {
    let test_db = TestDb::new().await;

    let user = users::get_by_id(test_db.pool(), 999).await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_persistence_error() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "First", "dup@x.com").await;

    let err = users::create(pool, CreateUser::new("Second", "dup@x.com", None))
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::Persistence(_)));

    let all = users::get_all(pool).await.unwrap();
    let with_email: Vec<_> = all.iter().filter(|u| u.email == "dup@x.com").collect();
    assert_eq!(with_email.len(), 1);
    assert_eq!(with_email[0].name, "First");
}

#[tokio::test]
async fn test_get_all_returns_every_user_in_insertion_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    assert!(users::get_all(pool).await.unwrap().is_empty());

    let a = create_test_user(pool, "A", "a@x.com").await;
    let b = create_test_user(pool, "B", "b@x.com").await;
    let c = create_test_user(pool, "C", "c@x.com").await;

    let ids: Vec<_> = users::get_all(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
    assert_eq!(users::count(pool).await.unwrap(), 3);
}

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Old", "old@x.com").await;

    let updated = users::update(
        pool,
        user.id,
        UpdateUser {
            name: "New".to_string(),
            email: "new@x.com".to_string(),
            phone: Some(987_654_321),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "New");
    assert_eq!(updated.email, "new@x.com");
    assert_eq!(updated.phone, Some(987_654_321));

    assert!(users::find_by_email(pool, "old@x.com").await.unwrap().is_none());
    let found = users::find_by_email(pool, "new@x.com").await.unwrap().unwrap();
    assert_eq!(found, updated);
}

#[tokio::test]
async fn test_update_can_clear_phone() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = users::create(pool, CreateUser::new("Cy", "cy@x.com", Some(1)))
        .await
        .unwrap();

    let mut update = UpdateUser::from(&user);
    update.phone = None;
    let updated = users::update(pool, user.id, update).await.unwrap();

    assert_eq!(updated.phone, None);
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let test_db = TestDb::new().await;

    let err = users::update(
        test_db.pool(),
        404,
        UpdateUser {
            name: "Ghost".to_string(),
            email: "ghost@x.com".to_string(),
            phone: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RosterError::UserNotFound(404)));
}

#[tokio::test]
async fn test_update_to_taken_email_fails() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "A", "a@x.com").await;
    let b = create_test_user(pool, "B", "b@x.com").await;

    let mut update = UpdateUser::from(&b);
    update.email = "a@x.com".to_string();
    let err = users::update(pool, b.id, update).await.unwrap_err();

    assert!(matches!(err, RosterError::Persistence(_)));
    let unchanged = users::get_by_id(pool, b.id).await.unwrap().unwrap();
    assert_eq!(unchanged.email, "b@x.com");
}

#[tokio::test]
async fn test_delete_removes_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Del", "del@x.com").await;
    users::delete(pool, user.id).await.unwrap();

    assert!(users::get_by_id(pool, user.id).await.unwrap().is_none());

    let err = users::delete(pool, user.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = create_test_user(pool, "One", "one@x.com").await;
    users::delete(pool, first.id).await.unwrap();
    let second = create_test_user(pool, "Two", "two@x.com").await;

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "Keep", "keep@x.com").await;

    roster_storage::run_migrations(pool)
        .await
        .expect("Second migration run should be a no-op");

    assert_eq!(users::count(pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_store_trait_round_trip() {
    let test_db = TestDb::new().await;
    let store = SqliteUserStore::new(test_db.pool().clone());

    let created = store
        .create_user(CreateUser::new("Trait", "trait@x.com", None))
        .await
        .unwrap();
    assert_eq!(store.get_user(created.id).await.unwrap(), Some(created.clone()));

    let mut update = UpdateUser::from(&created);
    update.phone = Some(42);
    let updated = store.update_user(created.id, update).await.unwrap();
    assert_eq!(updated.phone, Some(42));

    assert_eq!(store.get_all_users().await.unwrap(), vec![updated]);

    store.delete_user(created.id).await.unwrap();
    assert!(store.get_user(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_open_creates_schema() {
    let temp_dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("fresh.db").display());

    let store = roster_storage::open(&url).await.expect("Failed to open store");
    assert!(store.get_all_users().await.unwrap().is_empty());

    // Reopening the same file keeps existing rows
    store
        .create_user(CreateUser::new("Persisted", "p@x.com", None))
        .await
        .unwrap();
    drop(store);

    let reopened = roster_storage::open(&url).await.unwrap();
    assert_eq!(reopened.get_all_users().await.unwrap().len(), 1);
}
