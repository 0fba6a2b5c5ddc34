use super::{Candidate, ChainedHashMap, DEFAULT_BUCKETS, IndexKind, RecipeIndex};
use crate::recipe::{Recipe, RecipeId};
use std::sync::Arc;

/// Hash-table index keyed by recipe id. Every query is a full scan of the table.
#[derive(Debug, Clone)]
pub struct HashIndex {
    table: ChainedHashMap<RecipeId, Arc<Recipe>>,
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }
}

impl HashIndex {
    pub fn with_buckets(buckets: usize) -> Self {
        Self {
            table: ChainedHashMap::new(buckets),
        }
    }

    pub fn get(&self, id: RecipeId) -> Option<&Arc<Recipe>> {
        self.table.get(&id)
    }

    /// Read access to the underlying table, e.g. for chain-length diagnostics.
    pub fn table(&self) -> &ChainedHashMap<RecipeId, Arc<Recipe>> {
        &self.table
    }
}

impl RecipeIndex for HashIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::HashMap
    }

    fn insert(&mut self, id: RecipeId, recipe: Arc<Recipe>) {
        self.table.insert(id, recipe);
    }

    fn count(&self) -> usize {
        self.table.count()
    }

    fn all_items(&self) -> Vec<(RecipeId, Arc<Recipe>)> {
        self.table
            .all_items()
            .map(|(id, recipe)| (*id, Arc::clone(recipe)))
            .collect()
    }

    fn search(&self, ingredients: &[String]) -> Vec<Candidate> {
        self.table
            .all_items()
            .filter_map(|(id, recipe)| {
                let matched: Vec<String> = ingredients
                    .iter()
                    .filter(|ingredient| recipe.has_ingredient(ingredient))
                    .cloned()
                    .collect();
                (!matched.is_empty()).then(|| Candidate {
                    id: *id,
                    recipe: Arc::clone(recipe),
                    matched,
                })
            })
            .collect()
    }

    fn find_by_name(&self, name: &str) -> Option<Arc<Recipe>> {
        let key = name.trim().to_lowercase();
        // Bucket order is arbitrary, so pick the lowest id to agree with the trie.
        self.table
            .all_items()
            .filter(|(_, recipe)| recipe.name_key() == key)
            .min_by_key(|(id, _)| **id)
            .map(|(_, recipe)| Arc::clone(recipe))
    }
}
