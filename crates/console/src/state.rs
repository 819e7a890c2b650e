//! Application state shared across handlers.

use std::sync::Arc;

use crate::{catalog::CatalogApi, config::ConsoleConfig, services::ListRegistry};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ConsoleConfig,
    catalog: Arc<dyn CatalogApi>,
    lists: ListRegistry,
}

impl AppState {
    /// Build state around a catalog client.
    #[must_use]
    pub fn new(config: ConsoleConfig, catalog: Arc<dyn CatalogApi>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                lists: ListRegistry::new(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ConsoleConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogApi {
        self.inner.catalog.as_ref()
    }

    #[must_use]
    pub fn lists(&self) -> &ListRegistry {
        &self.inner.lists
    }
}
