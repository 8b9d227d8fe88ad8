//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, RouteCache};
use crate::graph::{CityRegistry, TransitGraph};
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The graph and registry are built once at startup and only ever read.
#[derive(Clone)]
pub struct AppState {
    /// Transit graph
    pub graph: Arc<TransitGraph>,

    /// City to station lookup
    pub registry: Arc<CityRegistry>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,

    /// Cached query results
    pub cache: Arc<RouteCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        graph: TransitGraph,
        registry: CityRegistry,
        config: PlannerConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            graph: Arc::new(graph),
            registry: Arc::new(registry),
            config: Arc::new(config),
            cache: Arc::new(RouteCache::new(cache_config)),
        }
    }
}
