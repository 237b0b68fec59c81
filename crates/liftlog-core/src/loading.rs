//! Loading flag shared between a store and its UI bindings.
//!
//! The flag is set for the duration of a store action and cleared by the
//! guard's drop on every exit path, including early error returns.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct LoadingFlag(Rc<Cell<bool>>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Set the flag; it clears when the returned guard drops.
    pub fn begin(&self) -> LoadingGuard {
        self.0.set(true);
        LoadingGuard(self.0.clone())
    }
}

pub struct LoadingGuard(Rc<Cell<bool>>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
