//! Liftlog — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer). It assembles the
//! platform adapters, hands them to the store layer, and restores persisted
//! state before the UI takes over.

mod app;

pub use app::AppStores;

use wasm_bindgen::prelude::*;

/// WASM entry point — called from index.html
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Liftlog WASM starting...");

    wasm_bindgen_futures::spawn_local(async {
        let stores = AppStores::bootstrap().await;
        if stores.session.is_logged_in() {
            log::info!("resumed session for '{}'", stores.session.username());
        } else {
            log::info!("no persisted session");
        }
    });
}
