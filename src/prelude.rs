//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to build a catalog, index it and run queries.
//!
//! # Example
//!
//! ```rust,no_run
//! use kondate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let service = RecipeService::bootstrap(ServiceConfig::from_env());
//! let results = service.search(&SearchRequest::new(["chicken", "rice"]))?;
//! println!("{} matches", results.total_matches);
//! # Ok(())
//! # }
//! ```

// Catalog and model
pub use crate::catalog::Catalog;
pub use crate::recipe::{RawRecipeRow, Recipe, RecipeId, normalize};

// Indices
pub use crate::index::{DEFAULT_BUCKETS, HashIndex, IndexKind, PrefixIndex, RecipeIndex};

// Querying
pub use crate::query::{
    MAX_INGREDIENTS, MAX_RESULTS, RecipeDetail, SearchEngine, SearchHit, SearchRequest,
    SearchResults, SortKey,
};

// Service and persistence
pub use crate::config::ServiceConfig;
pub use crate::service::RecipeService;
pub use crate::snapshot::CatalogSnapshot;

// Error types
pub use crate::error::{NotFoundError, QueryError, SnapshotError, SourceError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
