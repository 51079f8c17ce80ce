//! Shared application state for the userlist server.

use std::sync::Arc;

use userlist_core::{InMemoryUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    users: Arc<dyn UserStore>,
}

impl AppState {
    /// Build state around the seeded in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryUserStore::new()))
    }

    pub fn with_store(users: Arc<dyn UserStore>) -> Self {
        tracing::debug!(users = users.find_all().len(), "user store ready");
        Self {
            inner: Arc::new(AppStateInner { users }),
        }
    }

    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
