use super::model::{MISSING_DESCRIPTION, Recipe, UNNAMED_RECIPE};
use super::parsing::parse_optional_list;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Spreadsheet export artifact that stands in for a missing description.
const DESCRIPTION_PLACEHOLDER: &str = "#NAME?";

const UNKNOWN_SUBMISSION: &str = "Unknown";

/// One row of the tabular recipe source, every field kept as raw text.
///
/// Field names follow the `RAW_recipes.csv` columns; unknown columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecipeRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub minutes: Option<String>,
    #[serde(default)]
    pub submitted: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub n_steps: Option<String>,
    #[serde(default)]
    pub steps: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub n_ingredients: Option<String>,
}

/// Converts a raw source row into a canonical [`Recipe`].
///
/// This never fails: every missing or malformed field degrades to its default.
pub fn normalize(row: RawRecipeRow) -> Recipe {
    let name = present(row.name.as_deref())
        .map(title_case)
        .unwrap_or_else(|| UNNAMED_RECIPE.to_string());

    let tags: BTreeSet<String> = parse_optional_list(row.tags.as_deref())
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    let ingredients: Vec<String> = parse_optional_list(row.ingredients.as_deref())
        .iter()
        .map(|ingredient| ingredient_key(ingredient))
        .filter(|ingredient| !ingredient.is_empty())
        .collect();

    let instructions: Vec<String> = parse_optional_list(row.steps.as_deref())
        .iter()
        .map(|step| capitalize(step.trim()))
        .filter(|step| !step.is_empty())
        .collect();

    Recipe {
        name,
        total_time_minutes: parse_minutes(row.minutes.as_deref()),
        num_steps: reconcile_count(row.n_steps.as_deref(), instructions.len()),
        num_ingredients: reconcile_count(row.n_ingredients.as_deref(), ingredients.len()),
        submitted: present(row.submitted.as_deref())
            .unwrap_or(UNKNOWN_SUBMISSION)
            .to_string(),
        tags,
        description: normalize_description(row.description.as_deref()),
        ingredients,
        instructions,
    }
}

/// The form an ingredient takes as an index key and in search requests.
pub fn ingredient_key(ingredient: &str) -> String {
    ingredient.trim().to_lowercase()
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalizes every whitespace-separated word and collapses runs of whitespace.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn present(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

fn normalize_description(text: Option<&str>) -> String {
    match present(text) {
        Some(DESCRIPTION_PLACEHOLDER) | None => MISSING_DESCRIPTION.to_string(),
        Some(description) => description
            .split(". ")
            .map(|sentence| upper_first(sentence.trim()))
            .collect::<Vec<_>>()
            .join(". "),
    }
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_minutes(text: Option<&str>) -> u64 {
    let Some(text) = present(text) else {
        return 0;
    };
    if let Ok(minutes) = text.parse::<u64>() {
        return minutes;
    }
    // Some exports write integral columns as floats ("30.0").
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => value as u64,
        _ => 0,
    }
}

/// Trusts the source count only when it agrees with the parsed list.
fn reconcile_count(text: Option<&str>, parsed_len: usize) -> usize {
    match present(text).and_then(|t| t.parse::<usize>().ok()) {
        Some(count) if parsed_len == 0 || count == parsed_len => count,
        _ => parsed_len,
    }
}
