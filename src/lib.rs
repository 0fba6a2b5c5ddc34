//! # Kondate - Recipe Search Engine
//!
//! **Kondate** answers two questions over a fixed catalog of recipes: *which recipes
//! use (some of) these ingredients*, optionally restricted to a set of tags and
//! ranked by a chosen criterion, and *what is the full record for this recipe name*.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Read raw rows from the recipe CSV with [`source::load_rows`],
//!     or restore a previously written [`snapshot::CatalogSnapshot`].
//! 2.  **Build the Catalog**: [`Catalog::build`] normalizes every row into a canonical
//!     [`Recipe`]. Malformed fields fall back to defaults; normalization never fails.
//! 3.  **Index**: A [`SearchEngine`] builds both backends over the catalog: character
//!     tries keyed by ingredient and by name, and a chained hash table keyed by id.
//! 4.  **Query**: Run [`SearchEngine::search`] with a [`SearchRequest`], choosing the
//!     backend per request. Results are filtered, sorted and capped at 30.
//!
//! For long-running processes, wrap the engine in a [`RecipeService`], which publishes
//! rebuilt engines atomically so concurrent readers never see a partial index.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kondate::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let rows = kondate::source::load_rows("RAW_recipes.csv")?;
//!     let catalog = Catalog::build(rows);
//!     let engine = SearchEngine::build(catalog, DEFAULT_BUCKETS, IndexKind::HashMap);
//!
//!     let request = SearchRequest::new(["pasta", "tomato"])
//!         .with_tags(["italian"])
//!         .sorted_by(SortKey::TotalTime)
//!         .using(IndexKind::Trie);
//!
//!     match engine.search(&request) {
//!         Ok(results) => {
//!             for hit in &results.recipes {
//!                 println!("{} ({} min), missing: {:?}", hit.name, hit.total_time_minutes, hit.missing_ingredients);
//!             }
//!         }
//!         Err(QueryError::NotFound(_)) => println!("Nothing matched."),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     let spaghetti = engine.find_by_name(IndexKind::Trie, "spaghetti carbonara")?;
//!     println!("{}", spaghetti.description);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod prelude;
pub mod query;
pub mod recipe;
pub mod service;
pub mod snapshot;
pub mod source;

#[cfg(feature = "server")]
pub mod server;

pub use catalog::Catalog;
pub use query::{SearchEngine, SearchRequest};
pub use recipe::Recipe;
pub use service::RecipeService;
