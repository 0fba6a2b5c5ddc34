use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable identifier of a recipe inside one catalog snapshot (its source row position).
pub type RecipeId = u64;

/// Name substituted when the source row carries none.
pub const UNNAMED_RECIPE: &str = "Unnamed Recipe";

/// Description substituted when the source row carries none (or a spreadsheet placeholder).
pub const MISSING_DESCRIPTION: &str = "Description not available";

/// A canonical, normalized recipe record.
///
/// Recipes are produced by [`normalize`](crate::recipe::normalize) and then shared
/// read-only between the catalog and every index built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Title-cased, never empty.
    pub name: String,
    /// Zero means the source did not provide a usable duration.
    pub total_time_minutes: u64,
    pub num_steps: usize,
    pub num_ingredients: usize,
    /// Submission date as found in the source, or `"Unknown"`.
    pub submitted: String,
    /// Lowercase tags.
    pub tags: BTreeSet<String>,
    pub description: String,
    /// Ingredient match keys: trimmed and lowercased, in source order.
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Recipes without a cooking time are treated as incomplete and never show up in searches.
    pub fn is_searchable(&self) -> bool {
        self.total_time_minutes > 0
    }

    /// The key used by name lookups.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }

    /// Ingredients formatted for display ("olive oil" -> "Olive oil").
    pub fn display_ingredients(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|i| crate::recipe::normalize::capitalize(i))
            .collect()
    }
}
