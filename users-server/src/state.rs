//! Application state shared across handlers

use std::sync::Arc;

use crate::db::UserStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    /// Shared handle to the store, for shutdown after the router is gone.
    pub fn store_handle(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.store)
    }
}
