//! The closed vocabulary of tags a search may filter on.

use std::collections::BTreeSet;

pub const PREDEFINED_TAGS: [&str; 32] = [
    "vegan",
    "vegetarian",
    "gluten-free",
    "low-carb",
    "high-protein",
    "dairy-free",
    "nut-free",
    "low-fat",
    "italian",
    "mexican",
    "indian",
    "chinese",
    "mediterranean",
    "american",
    "thai",
    "japanese",
    "breakfast",
    "lunch",
    "dinner",
    "snack",
    "dessert",
    "grilled",
    "baked",
    "fried",
    "roasted",
    "slow-cooked",
    "raw",
    "spicy",
    "sweet",
    "savory",
    "sour",
    "salty",
];

pub fn is_predefined_tag(tag: &str) -> bool {
    PREDEFINED_TAGS.contains(&tag)
}

/// Returns every tag outside the vocabulary, sorted and de-duplicated.
pub fn invalid_tags<'a, I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    tags.into_iter()
        .filter(|tag| !is_predefined_tag(tag))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
