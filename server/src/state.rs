//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! console keeps no session table of its own: the browser's `token` cookie is
//! the only session record, so state is limited to configuration and the
//! remote API client.

use std::sync::Arc;

use crate::config::ConsoleConfig;
use crate::services::remote::RemoteAuth;

/// Clone is required by Axum; every field is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ConsoleConfig>,
    pub remote: Arc<dyn RemoteAuth>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ConsoleConfig, remote: Arc<dyn RemoteAuth>) -> Self {
        Self { config: Arc::new(config), remote }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
