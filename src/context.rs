//! Application Context
//!
//! Shared handles provided via Leptos context: the API client (owning the
//! session store) and the router. Constructed once in `App`; no ambient
//! globals.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::route::{Route, Router};

#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    pub router: Router,
}

impl AppContext {
    pub fn new(api: ApiClient, router: Router) -> Self {
        AppContext { api: StoredValue::new(api), router }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// End the session and return to the auth view.
    pub fn logout(&self) {
        self.api().session().logout();
        self.router.navigate(Route::Auth);
    }
}

/// Blocking user alert for failed write operations.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
