//! Composition root — builds adapters, wires the five stores, and runs the
//! startup restore sequence.

use std::rc::Rc;

use wasm_bindgen::JsValue;

use liftlog_core::analysis::AnalysisStore;
use liftlog_core::catalog::CatalogStore;
use liftlog_core::planned::PlannedWorkoutStore;
use liftlog_core::ports::{GatewayPort, NavigatorPort};
use liftlog_core::session::SessionStore;
use liftlog_core::workouts::WorkoutStore;
use liftlog_platform::storage::auto_detect_storage;
use liftlog_platform::{BrowserNavigator, RestGateway};

const DEFAULT_API_URL: &str = "/api";
const API_URL_GLOBAL: &str = "LIFTLOG_API_URL";

/// API base URL: a window-scoped override wins, otherwise the compiled
/// default (same-origin `/api`).
fn api_base_url() -> String {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str(API_URL_GLOBAL)).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// All five stores, sharing one gateway and one storage backend.
pub struct AppStores {
    pub session: Rc<SessionStore>,
    pub catalog: Rc<CatalogStore>,
    pub workouts: Rc<WorkoutStore>,
    pub planned: Rc<PlannedWorkoutStore>,
    pub analysis: Rc<AnalysisStore>,
}

impl AppStores {
    /// Build the store graph and restore persisted state.
    pub async fn bootstrap() -> Self {
        let base_url = api_base_url();
        log::info!("API base URL: {base_url}");

        let gateway: Rc<dyn GatewayPort> = Rc::new(RestGateway::new(base_url));
        let storage = auto_detect_storage();
        let navigator: Rc<dyn NavigatorPort> = Rc::new(BrowserNavigator);

        let session = Rc::new(SessionStore::new(
            gateway.clone(),
            storage.clone(),
            navigator,
        ));
        let catalog = Rc::new(CatalogStore::new(gateway.clone()));
        let workouts = Rc::new(WorkoutStore::new(
            gateway.clone(),
            session.clone(),
            catalog.clone(),
        ));
        let planned = Rc::new(PlannedWorkoutStore::new(
            gateway.clone(),
            session.clone(),
            catalog.clone(),
        ));
        let analysis = Rc::new(AnalysisStore::new(gateway, storage));

        let stores = Self {
            session,
            catalog,
            workouts,
            planned,
            analysis,
        };
        stores.restore().await;
        stores
    }

    /// Startup restore: session and analysis state first, then the catalog,
    /// then the signed-in user's lists. Fetch failures are recorded in the
    /// owning store's error state, not fatal here.
    async fn restore(&self) {
        self.session.restore_session().await;
        self.analysis.restore().await;

        let _ = self.catalog.fetch_all().await;

        if let Some(user) = self.session.current_user() {
            let _ = self.workouts.fetch_user_workouts(user.item_id).await;
            let _ = self.planned.fetch_user_planned_workouts(user.item_id).await;
        }
    }
}
