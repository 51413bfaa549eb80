//! Core domain types

mod user;

pub use user::{CreateUser, UpdateUser, User};

/// User identifier, assigned by storage on insert
pub type UserId = i64;
