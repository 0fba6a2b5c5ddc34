use crate::error::ValidationError;
use crate::index::IndexKind;
use crate::recipe::{Recipe, RecipeId};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

mod engine;
mod rank;
mod validate;

pub use engine::SearchEngine;
pub use rank::rank;
pub use validate::{ValidatedQuery, validate};

/// Only this many requested ingredients are considered; the rest are ignored.
pub const MAX_INGREDIENTS: usize = 10;

/// Maximum number of recipes returned by one search.
pub const MAX_RESULTS: usize = 30;

/// Criterion used to order search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Most matched ingredients first.
    #[default]
    MatchedIngredients,
    /// Fewest missing ingredients first.
    MissingIngredients,
    /// Shortest total time first.
    TotalTime,
    /// Fewest steps first.
    NumSteps,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::MatchedIngredients => "matched_ingredients",
            SortKey::MissingIngredients => "missing_ingredients",
            SortKey::TotalTime => "total_time",
            SortKey::NumSteps => "num_steps",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "matched_ingredients" => Ok(SortKey::MatchedIngredients),
            "missing_ingredients" => Ok(SortKey::MissingIngredients),
            "total_time" => Ok(SortKey::TotalTime),
            "num_steps" => Ok(SortKey::NumSteps),
            _ => Err(ValidationError::InvalidSortKey(s.to_string())),
        }
    }
}

/// A raw search request, exactly as the caller supplied it.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub ingredients: Vec<String>,
    pub tags: Vec<String>,
    pub sort_by: SortKey,
    /// `None` uses the engine's default backend.
    pub backend: Option<IndexKind>,
    pub max_minutes: Option<u64>,
    pub min_steps: Option<usize>,
    pub max_steps: Option<usize>,
}

impl SearchRequest {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn sorted_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn using(mut self, backend: IndexKind) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_max_minutes(mut self, minutes: u64) -> Self {
        self.max_minutes = Some(minutes);
        self
    }

    pub fn with_step_range(mut self, min_steps: Option<usize>, max_steps: Option<usize>) -> Self {
        self.min_steps = min_steps;
        self.max_steps = max_steps;
        self
    }
}

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    #[serde(skip)]
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    #[serde(rename = "minutes")]
    pub total_time_minutes: u64,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    #[serde(rename = "n_steps")]
    pub num_steps: usize,
    pub matched_tags: Vec<String>,
    pub instructions: Vec<String>,
}

/// A non-empty, capped and sorted result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub total_matches: usize,
    pub recipes: Vec<SearchHit>,
}

/// The full record returned by a name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub name: String,
    pub description: String,
    pub minutes: u64,
    pub tags: Vec<String>,
    pub n_steps: usize,
    pub steps: Vec<String>,
    pub ingredients: Vec<String>,
    pub n_ingredients: usize,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            minutes: recipe.total_time_minutes,
            tags: recipe.tags.iter().cloned().collect(),
            n_steps: recipe.num_steps,
            steps: recipe.instructions.clone(),
            ingredients: recipe.display_ingredients(),
            n_ingredients: recipe.num_ingredients,
        }
    }
}
