/// Shared application state
use crate::config::Environment;
use roster_core::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, environment: Environment) -> Self {
        Self { store, environment }
    }
}
