use super::{Candidate, IndexKind, RecipeIndex, Trie};
use crate::recipe::{Recipe, RecipeId};
use ahash::AHashMap;
use std::sync::Arc;

type Entry = (RecipeId, Arc<Recipe>);

/// Trie-backed index: one trie keyed by ingredient, one keyed by lowercased recipe name.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    ingredients: Trie<Entry>,
    names: Trie<Entry>,
    recipes: Vec<Entry>,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipes stored under exactly this ingredient key.
    pub fn recipes_with_ingredient(&self, ingredient: &str) -> &[Entry] {
        self.ingredients.search(ingredient)
    }

    /// Recipes stored under exactly this lowercased name, in insertion order.
    pub fn recipes_named(&self, name_key: &str) -> &[Entry] {
        self.names.search(name_key)
    }
}

impl RecipeIndex for PrefixIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Trie
    }

    fn insert(&mut self, id: RecipeId, recipe: Arc<Recipe>) {
        for ingredient in &recipe.ingredients {
            self.ingredients
                .insert(ingredient, (id, Arc::clone(&recipe)));
        }
        self.names.insert(&recipe.name_key(), (id, Arc::clone(&recipe)));
        self.recipes.push((id, recipe));
    }

    fn count(&self) -> usize {
        self.recipes.len()
    }

    fn all_items(&self) -> Vec<(RecipeId, Arc<Recipe>)> {
        self.recipes.clone()
    }

    fn search(&self, ingredients: &[String]) -> Vec<Candidate> {
        // Each lookup only proves one ingredient, so matches are merged per recipe
        // name across the loop.
        let mut by_name: AHashMap<&str, usize> = AHashMap::new();
        let mut candidates: Vec<Candidate> = Vec::new();

        for ingredient in ingredients {
            for (id, recipe) in self.ingredients.search(ingredient) {
                let slot = *by_name.entry(recipe.name.as_str()).or_insert_with(|| {
                    candidates.push(Candidate {
                        id: *id,
                        recipe: Arc::clone(recipe),
                        matched: Vec::new(),
                    });
                    candidates.len() - 1
                });
                let matched = &mut candidates[slot].matched;
                if !matched.contains(ingredient) {
                    matched.push(ingredient.clone());
                }
            }
        }
        candidates
    }

    fn find_by_name(&self, name: &str) -> Option<Arc<Recipe>> {
        self.names
            .search(&name.trim().to_lowercase())
            .first()
            .map(|(_, recipe)| Arc::clone(recipe))
    }
}
