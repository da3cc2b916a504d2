use std::sync::Arc;
use std::time::Duration;
use vecroute_common::{AppConfig, Result};
use vecroute_routing::{RouteOptions, RouteService};
use vecroute_vector::VectorStore;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Route algorithms over the shared vector store
    pub routes: RouteService,

    /// Number of locations in the store
    pub location_count: usize,

    /// Number of highways in the store
    pub highway_count: usize,
}

impl AppState {
    /// Wrap an already built store
    pub fn new(config: AppConfig, store: VectorStore) -> Self {
        let (location_count, highway_count) = store.stats();
        let routes = RouteService::new(Arc::new(store), RouteOptions::from(&config));

        Self {
            config,
            routes,
            location_count,
            highway_count,
        }
    }

    /// Load the configured dataset file
    pub fn load(config: AppConfig) -> Result<Self> {
        let store = VectorStore::load(&config.dataset_path, config.metric)?;
        Ok(Self::new(config, store))
    }

    /// Deadline applied to each route request
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.config.query_timeout_ms)
    }
}
