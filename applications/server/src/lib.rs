//! Roster Server Library
//!
//! HTTP CRUD service for the user resource: JSON in, validation, one store
//! operation, JSON out.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{Environment, ServerConfig};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
