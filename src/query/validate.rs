use super::{MAX_INGREDIENTS, SearchRequest, SortKey};
use crate::error::ValidationError;
use crate::index::{Candidate, IndexKind};
use crate::recipe::{ingredient_key, invalid_tags};
use itertools::Itertools;
use std::collections::BTreeSet;

/// A search request that passed validation, with ingredients and tags normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    /// At most [`MAX_INGREDIENTS`] keys, unique, in request order.
    pub ingredients: Vec<String>,
    pub tags: BTreeSet<String>,
    pub sort_by: SortKey,
    pub backend: Option<IndexKind>,
    pub max_minutes: Option<u64>,
    pub min_steps: Option<usize>,
    pub max_steps: Option<usize>,
}

/// Checks a request before any index is consulted.
///
/// Ingredients beyond the first [`MAX_INGREDIENTS`] are dropped silently. Any tag
/// outside the predefined vocabulary rejects the whole request.
pub fn validate(request: &SearchRequest) -> Result<ValidatedQuery, ValidationError> {
    let ingredients: Vec<String> = request
        .ingredients
        .iter()
        .take(MAX_INGREDIENTS)
        .map(|ingredient| ingredient_key(ingredient))
        .filter(|ingredient| !ingredient.is_empty())
        .unique()
        .collect();

    if ingredients.is_empty() {
        return Err(ValidationError::EmptyIngredients);
    }

    let tags: BTreeSet<String> = request
        .tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    let invalid = invalid_tags(&tags);
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidTags(invalid));
    }

    Ok(ValidatedQuery {
        ingredients,
        tags,
        sort_by: request.sort_by,
        backend: request.backend,
        max_minutes: request.max_minutes,
        min_steps: request.min_steps,
        max_steps: request.max_steps,
    })
}

impl ValidatedQuery {
    /// Whether a candidate survives the filter stage.
    pub fn admits(&self, candidate: &Candidate) -> bool {
        let recipe = &candidate.recipe;
        if !recipe.is_searchable() {
            return false;
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|tag| recipe.tags.contains(tag)) {
            return false;
        }
        if self
            .max_minutes
            .is_some_and(|max| recipe.total_time_minutes > max)
        {
            return false;
        }
        if self.min_steps.is_some_and(|min| recipe.num_steps < min) {
            return false;
        }
        !self.max_steps.is_some_and(|max| recipe.num_steps > max)
    }

    /// Requested tags the recipe carries, sorted.
    pub fn matched_tags(&self, candidate: &Candidate) -> Vec<String> {
        self.tags
            .intersection(&candidate.recipe.tags)
            .cloned()
            .collect()
    }

    /// The recipe's own ingredients that were not requested, de-duplicated, in recipe order.
    pub fn missing_ingredients(&self, candidate: &Candidate) -> Vec<String> {
        candidate
            .recipe
            .ingredients
            .iter()
            .filter(|ingredient| !self.ingredients.contains(ingredient))
            .unique()
            .cloned()
            .collect()
    }
}
