//! `localStorage`-backed persistence.
//!
//! The browser API is synchronous; the async port signature is kept so the
//! stores stay backend-agnostic.

use async_trait::async_trait;

use liftlog_core::ports::StoragePort;
use liftlog_types::{Result, StoreError};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Fails when the browsing context denies storage access
    /// (private mode, sandboxed frame, non-browser runtime).
    pub fn new() -> Result<Self> {
        let storage = web_sys::window()
            .ok_or_else(|| StoreError::JsInterop("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::JsInterop(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Storage(format!("{e:?}")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("{e:?}")))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Storage(format!("{e:?}")))
    }

    fn backend_name(&self) -> &str {
        "localStorage"
    }
}
