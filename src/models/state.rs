use std::sync::Arc;

use tracing::info;

use crate::services::{Clock, TodoStore};

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// The singleton todo slot.
    pub store: TodoStore,
}

impl AppState {
    /// Creates a new application state whose timestamps come from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        info!("Initializing application state");

        Self {
            store: TodoStore::new(clock),
        }
    }
}
