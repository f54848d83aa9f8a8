pub mod config;
pub mod routes;
pub mod server;

use std::sync::Arc;

pub use config::ServiceConfig;

/// Shared application state passed to route handlers via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
