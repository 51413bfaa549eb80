//! User queries

use roster_core::{
    error::{Result, RosterError},
    types::{CreateUser, UpdateUser, User, UserId},
};
use sqlx::SqlitePool;

/// Get all users in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, phone, email
         FROM users
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, phone, email
         FROM users
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, phone, email
         FROM users
         WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Insert a user
///
/// A duplicate email surfaces as `RosterError::Persistence`.
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    let result = sqlx::query(
        "INSERT INTO users (name, phone, email)
         VALUES (?, ?, ?)",
    )
    .bind(&user.name)
    .bind(user.phone)
    .bind(&user.email)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    tracing::debug!(id, "inserted user");

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| RosterError::persistence("Failed to retrieve created user"))
}

/// Overwrite name, phone and email in one statement
///
/// The existence check and the write are the same statement, so a row deleted
/// concurrently yields `UserNotFound` rather than a silent no-op.
pub async fn update(pool: &SqlitePool, id: UserId, user: UpdateUser) -> Result<User> {
    let updated = sqlx::query_as::<_, User>(
        "UPDATE users
         SET name = ?, phone = ?, email = ?
         WHERE id = ?
         RETURNING id, name, phone, email",
    )
    .bind(&user.name)
    .bind(user.phone)
    .bind(&user.email)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    updated.ok_or(RosterError::UserNotFound(id))
}

pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RosterError::UserNotFound(id));
    }

    Ok(())
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
