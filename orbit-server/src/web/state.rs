//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::StaticCatalog;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The catalog is read-only once the server starts, so every request shares
/// one copy.
#[derive(Clone)]
pub struct AppState {
    /// Network data
    pub catalog: Arc<StaticCatalog>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: StaticCatalog, config: PlannerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
