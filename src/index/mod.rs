use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::recipe::{Recipe, RecipeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub mod hash_map;
mod hashed;
mod prefix;
pub mod trie;

pub use hash_map::{ChainedHashMap, DEFAULT_BUCKETS};
pub use hashed::HashIndex;
pub use prefix::PrefixIndex;
pub use trie::Trie;

/// A recipe that matched at least one requested ingredient.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: RecipeId,
    pub recipe: Arc<Recipe>,
    /// Requested ingredients this candidate matched, in request order.
    pub matched: Vec<String>,
}

/// A searchable index over a catalog.
///
/// Both backends answer the same questions with different layouts; the query
/// engine picks one per request and treats them interchangeably.
pub trait RecipeIndex: Send + Sync {
    fn kind(&self) -> IndexKind;

    /// Adds a recipe. Only called while the index is being built.
    fn insert(&mut self, id: RecipeId, recipe: Arc<Recipe>);

    /// Number of recipes indexed.
    fn count(&self) -> usize;

    /// Every indexed recipe with its id, in the backend's natural order.
    fn all_items(&self) -> Vec<(RecipeId, Arc<Recipe>)>;

    /// Gathers recipes containing any of the (already normalized) `ingredients`.
    fn search(&self, ingredients: &[String]) -> Vec<Candidate>;

    /// Exact, case-insensitive name lookup. The earliest-inserted recipe wins ties.
    fn find_by_name(&self, name: &str) -> Option<Arc<Recipe>>;
}

/// The available index backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// Character tries keyed by ingredient and by lowercased name.
    Trie,
    /// Chained hash table keyed by recipe id, scanned in full per query.
    #[default]
    HashMap,
}

impl IndexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::Trie => "trie",
            IndexKind::HashMap => "hashmap",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trie" => Ok(IndexKind::Trie),
            "hashmap" => Ok(IndexKind::HashMap),
            _ => Err(ValidationError::InvalidBackend(s.to_string())),
        }
    }
}

/// Builds a complete index of the given kind from every recipe in `catalog`.
pub fn build_index(kind: IndexKind, catalog: &Catalog, hash_buckets: usize) -> Box<dyn RecipeIndex> {
    let mut index: Box<dyn RecipeIndex> = match kind {
        IndexKind::Trie => Box::new(PrefixIndex::new()),
        IndexKind::HashMap => Box::new(HashIndex::with_buckets(hash_buckets)),
    };
    for (id, recipe) in catalog.all() {
        index.insert(id, Arc::clone(recipe));
    }
    tracing::debug!(backend = %kind, recipes = index.count(), "Built index");
    index
}
