//! Roster Core
//!
//! Domain types, the store trait, and error handling shared by the storage
//! layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUser`, `UpdateUser`
//! - **Core Traits**: `UserStore`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::CreateUser;
//!
//! let new_user = CreateUser::new("Ana", "ana@x.com", None);
//! assert!(new_user.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

pub use error::{Result, RosterError};
pub use store::UserStore;
pub use types::{CreateUser, UpdateUser, User, UserId};
