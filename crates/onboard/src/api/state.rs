//! Application state shared across handlers.

use crate::profile::ProfileService;

/// Cross-origin settings for the browser wizard.
#[derive(Clone, Debug, Default)]
pub struct CorsState {
    /// Origins allowed to call the API.
    pub allowed_origins: Vec<String>,
    /// Also allow the local development origins.
    pub dev_mode: bool,
}

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Profile service.
    pub profiles: ProfileService,
    /// CORS configuration.
    pub cors: CorsState,
}

impl AppState {
    pub fn new(profiles: ProfileService, cors: CorsState) -> Self {
        Self { profiles, cors }
    }
}
