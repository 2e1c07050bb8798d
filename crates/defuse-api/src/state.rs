//! Application state shared across API handlers

use std::sync::Arc;

use poa::TokenSelector;
use tokio::sync::Mutex;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    selector: Arc<Mutex<TokenSelector>>,
}

impl AppState {
    /// Create state around an existing selector
    pub fn new(selector: Arc<Mutex<TokenSelector>>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { selector }),
        }
    }

    /// Handle to the single selector owner
    pub fn selector(&self) -> Arc<Mutex<TokenSelector>> {
        self.inner.selector.clone()
    }

    /// Tear the selector down; late fetch results are dropped afterwards
    pub async fn shutdown(&self) {
        self.inner.selector.lock().await.teardown();
    }
}
