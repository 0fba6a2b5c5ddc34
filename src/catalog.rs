use crate::recipe::{RawRecipeRow, Recipe, RecipeId, normalize};
use std::sync::Arc;
use tracing::info;

/// The immutable set of recipes built from one source snapshot.
///
/// The catalog owns every recipe; indices only hold shared handles to them, so an
/// index can never disagree with the catalog it was built from.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    // Sorted by id.
    recipes: Vec<(RecipeId, Arc<Recipe>)>,
}

impl Catalog {
    /// Normalizes every row, assigning ids by row position.
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawRecipeRow>,
    {
        let recipes: Vec<Recipe> = rows.into_iter().map(normalize).collect();
        let catalog = Self::from_recipes(recipes);
        info!(recipes = catalog.len(), "Built recipe catalog");
        catalog
    }

    /// Wraps already-normalized recipes, assigning ids by position.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes
                .into_iter()
                .enumerate()
                .map(|(position, recipe)| (position as RecipeId, Arc::new(recipe)))
                .collect(),
        }
    }

    /// Builds a catalog from explicit `(id, recipe)` pairs, as read back from a snapshot.
    /// If an id appears twice the later recipe wins.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RecipeId, Recipe)>,
    {
        let mut recipes: Vec<(RecipeId, Arc<Recipe>)> = entries
            .into_iter()
            .map(|(id, recipe)| (id, Arc::new(recipe)))
            .collect();
        recipes.sort_by_key(|(id, _)| *id);
        recipes.reverse();
        recipes.dedup_by_key(|(id, _)| *id);
        recipes.reverse();
        Self { recipes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Every recipe with its id, in id order.
    pub fn all(&self) -> impl Iterator<Item = (RecipeId, &Arc<Recipe>)> {
        self.recipes.iter().map(|(id, recipe)| (*id, recipe))
    }

    pub fn get(&self, id: RecipeId) -> Option<&Arc<Recipe>> {
        self.recipes
            .binary_search_by_key(&id, |(candidate, _)| *candidate)
            .ok()
            .map(|position| &self.recipes[position].1)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
