//! Navigation adapter. The session store issues a single call on logout.

use liftlog_core::ports::NavigatorPort;

pub struct BrowserNavigator;

impl NavigatorPort for BrowserNavigator {
    fn to_root(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href("/") {
                log::warn!("navigation to root failed: {e:?}");
            }
        }
    }
}
