mod http;
mod memory;
mod traits;

pub use http::HttpStore;
pub use memory::MemoryStore;
pub use traits::{BillStore, StoreError};

use std::sync::Arc;

/// Configuration for the bill store backend.
pub struct StoreConfig {
    /// Base URL of the billing API (e.g., "http://127.0.0.1:5678").
    /// When `None`, fall back to the in-memory store.
    pub base_url: Option<String>,
    /// Bearer token sent with every API request.
    pub api_token: Option<String>,
}

impl StoreConfig {
    /// Build from environment variables.
    /// `BILLED_API_URL` selects the HTTP backend; without it the store
    /// is in-memory.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("BILLED_API_URL").ok(),
            api_token: std::env::var("BILLED_API_TOKEN").ok(),
        }
    }

    pub fn is_remote(&self) -> bool {
        self.base_url.is_some()
    }
}

/// Create a `BillStore` from configuration.
pub fn create_store(config: &StoreConfig) -> Arc<dyn BillStore> {
    match (&config.base_url, &config.api_token) {
        (Some(url), Some(token)) => Arc::new(HttpStore::with_token(url, token.clone())),
        (Some(url), None) => Arc::new(HttpStore::new(url)),
        (None, _) => Arc::new(MemoryStore::new()),
    }
}
