//! Pick the best available storage backend.
//!
//! Priority: localStorage → Memory (fallback). Session and analysis state
//! only survive a reload on the former.

use std::rc::Rc;

use liftlog_core::ports::StoragePort;

use super::{LocalStorage, MemoryStorage};

/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_storage() -> Rc<dyn StoragePort> {
    match LocalStorage::new() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({e}), falling back to memory");
            Rc::new(MemoryStorage::new())
        }
    }
}
