//! API server state

use crate::config::ServerConfig;

/// API server state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Base URL listed under `servers` in the API document
    pub public_url: String,
}

impl AppState {
    pub fn new(public_url: impl Into<String>) -> Self {
        Self {
            public_url: public_url.into(),
        }
    }

    pub fn from_config(server: &ServerConfig) -> Self {
        Self::new(server.public_url())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&ServerConfig::default())
    }
}
