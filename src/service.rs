use crate::catalog::Catalog;
use crate::config::ServiceConfig;
use crate::error::QueryError;
use crate::index::IndexKind;
use crate::query::{RecipeDetail, SearchEngine, SearchRequest, SearchResults};
use crate::snapshot::CatalogSnapshot;
use crate::source;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// Serves queries from a published [`SearchEngine`].
///
/// Readers take a cheap `Arc` handle to the current engine and keep using it for
/// the whole request. A reload builds a complete replacement first and only then
/// swaps the handle, so no request ever sees a half-built index.
pub struct RecipeService {
    config: ServiceConfig,
    published: RwLock<Arc<SearchEngine>>,
}

impl RecipeService {
    pub fn new(catalog: Catalog, config: ServiceConfig) -> Self {
        let engine = SearchEngine::build(catalog, config.hash_buckets, config.default_backend);
        Self {
            config,
            published: RwLock::new(Arc::new(engine)),
        }
    }

    /// Loads the catalog described by `config` and publishes an engine over it.
    /// Never fails: an unavailable source yields an empty (but reachable) service.
    pub fn bootstrap(config: ServiceConfig) -> Self {
        let catalog = load_catalog(&config);
        Self::new(catalog, config)
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The currently published engine.
    pub fn engine(&self) -> Arc<SearchEngine> {
        Arc::clone(&self.published.read())
    }

    /// Builds an engine over `catalog` and publishes it in place of the current one.
    pub fn reload(&self, catalog: Catalog) {
        let engine = SearchEngine::build(
            catalog,
            self.config.hash_buckets,
            self.config.default_backend,
        );
        let recipes = engine.catalog().len();
        *self.published.write() = Arc::new(engine);
        info!(recipes, "Published reloaded search engine");
    }

    /// Re-reads the configured source and publishes the result.
    pub fn reload_from_source(&self) {
        self.reload(load_catalog(&self.config));
    }

    pub fn search(&self, request: &SearchRequest) -> Result<SearchResults, QueryError> {
        self.engine().search(request)
    }

    pub fn recipe_detail(&self, backend: IndexKind, name: &str) -> Result<RecipeDetail, QueryError> {
        self.engine().recipe_detail(backend, name)
    }
}

/// Loads the catalog from the snapshot when one is configured and readable,
/// otherwise from the raw source. Failures are logged and produce an empty catalog.
pub fn load_catalog(config: &ServiceConfig) -> Catalog {
    if let Some(snapshot_path) = &config.snapshot_path {
        if snapshot_path.exists() {
            match CatalogSnapshot::from_file(snapshot_path) {
                Ok(snapshot) => {
                    info!(
                        path = %snapshot_path.display(),
                        recipes = snapshot.len(),
                        "Loaded catalog snapshot"
                    );
                    return snapshot.into_catalog();
                }
                Err(e) => warn!(
                    path = %snapshot_path.display(),
                    error = %e,
                    "Snapshot unreadable, falling back to raw source"
                ),
            }
        } else {
            warn!(
                path = %snapshot_path.display(),
                "Snapshot not found, falling back to raw source"
            );
        }
    }

    match source::load_rows(&config.data_path) {
        Ok(rows) => Catalog::build(rows),
        Err(e) => {
            warn!(error = %e, "Recipe source unavailable, serving an empty catalog");
            Catalog::empty()
        }
    }
}
