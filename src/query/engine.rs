use super::{RecipeDetail, SearchHit, SearchRequest, SearchResults, rank, validate};
use crate::catalog::Catalog;
use crate::error::{NotFoundError, QueryError};
use crate::index::{IndexKind, RecipeIndex, build_index};
use crate::recipe::Recipe;
use std::sync::Arc;
use tracing::{debug, info};

/// A catalog together with both of its fully built indices.
///
/// Built once and then only read; a reload builds a new engine instead of
/// touching this one.
pub struct SearchEngine {
    catalog: Catalog,
    trie: Box<dyn RecipeIndex>,
    hashmap: Box<dyn RecipeIndex>,
    default_backend: IndexKind,
}

impl SearchEngine {
    pub fn build(catalog: Catalog, hash_buckets: usize, default_backend: IndexKind) -> Self {
        let trie = build_index(IndexKind::Trie, &catalog, hash_buckets);
        let hashmap = build_index(IndexKind::HashMap, &catalog, hash_buckets);
        info!(
            recipes = catalog.len(),
            hash_buckets,
            default_backend = %default_backend,
            "Search engine ready"
        );
        Self {
            catalog,
            trie,
            hashmap,
            default_backend,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_backend(&self) -> IndexKind {
        self.default_backend
    }

    pub fn index(&self, kind: IndexKind) -> &dyn RecipeIndex {
        match kind {
            IndexKind::Trie => self.trie.as_ref(),
            IndexKind::HashMap => self.hashmap.as_ref(),
        }
    }

    /// Runs the full pipeline: validate, gather, filter, sort, cap.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchResults)`: at least one recipe matched.
    /// * `Err(QueryError::Validation)`: the request was rejected before matching.
    /// * `Err(QueryError::NotFound)`: the request was valid but nothing matched.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResults, QueryError> {
        let query = validate(request)?;
        let backend = query.backend.unwrap_or(self.default_backend);

        let candidates = self.index(backend).search(&query.ingredients);
        let gathered = candidates.len();

        let hits: Vec<SearchHit> = candidates
            .into_iter()
            .filter(|candidate| query.admits(candidate))
            .map(|candidate| SearchHit {
                id: candidate.id,
                name: candidate.recipe.name.clone(),
                description: candidate.recipe.description.clone(),
                total_time_minutes: candidate.recipe.total_time_minutes,
                missing_ingredients: query.missing_ingredients(&candidate),
                num_steps: candidate.recipe.num_steps,
                matched_tags: query.matched_tags(&candidate),
                instructions: candidate.recipe.instructions.clone(),
                matched_ingredients: candidate.matched,
            })
            .collect();
        let admitted = hits.len();

        let recipes = rank(hits, query.sort_by);
        debug!(
            backend = %backend,
            ingredients = query.ingredients.len(),
            tags = query.tags.len(),
            sort_by = %query.sort_by,
            gathered,
            admitted,
            returned = recipes.len(),
            "Search evaluated"
        );

        if recipes.is_empty() {
            return Err(NotFoundError::NoMatches.into());
        }
        Ok(SearchResults {
            total_matches: recipes.len(),
            recipes,
        })
    }

    /// Looks a recipe up by exact, case-insensitive name. Incomplete recipes are included.
    pub fn find_by_name(&self, backend: IndexKind, name: &str) -> Result<Arc<Recipe>, QueryError> {
        self.index(backend)
            .find_by_name(name)
            .ok_or_else(|| NotFoundError::Recipe(name.to_string()).into())
    }

    /// Like [`SearchEngine::find_by_name`], shaped for display.
    pub fn recipe_detail(&self, backend: IndexKind, name: &str) -> Result<RecipeDetail, QueryError> {
        self.find_by_name(backend, name)
            .map(|recipe| RecipeDetail::from(recipe.as_ref()))
    }
}
