//! Store trait for the user resource

use crate::error::Result;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use async_trait::async_trait;

/// Persistent storage for users
///
/// Every operation is its own atomic unit and commits before returning.
/// Implementations receive their storage handle at construction.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return it with its assigned id
    async fn create_user(&self, user: CreateUser) -> Result<User>;

    /// Get all users
    async fn get_all_users(&self) -> Result<Vec<User>>;

    /// Get user by ID, `None` when no row matches
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Overwrite every mutable field of a user
    ///
    /// Returns `RosterError::UserNotFound` when the row no longer exists.
    async fn update_user(&self, id: UserId, user: UpdateUser) -> Result<User>;

    /// Delete a user
    ///
    /// Returns `RosterError::UserNotFound` when the row does not exist.
    async fn delete_user(&self, id: UserId) -> Result<()>;
}
