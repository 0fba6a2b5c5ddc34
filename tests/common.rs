//! Common test utilities for building raw rows, catalogs and engines.
use kondate::prelude::*;

/// Builds a raw source row with the fields most tests care about.
#[allow(dead_code)]
pub fn raw_row(name: &str, minutes: u64, ingredients: &[&str], tags: &[&str]) -> RawRecipeRow {
    RawRecipeRow {
        name: Some(name.to_string()),
        minutes: Some(minutes.to_string()),
        submitted: Some("2005-09-16".to_string()),
        tags: Some(python_list(tags)),
        n_steps: Some("2".to_string()),
        steps: Some(python_list(&["mix everything", "cook until done"])),
        description: Some("a family favourite".to_string()),
        ingredients: Some(python_list(ingredients)),
        n_ingredients: Some(ingredients.len().to_string()),
    }
}

/// Formats items the way the recipe source stores lists: `['a', 'b']`.
#[allow(dead_code)]
pub fn python_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Catalog with a single recipe: "Spaghetti" (pasta, tomato; italian; 30 minutes).
#[allow(dead_code)]
pub fn spaghetti_catalog() -> Catalog {
    Catalog::build(vec![raw_row(
        "spaghetti",
        30,
        &["pasta", "tomato"],
        &["italian"],
    )])
}

/// A small mixed catalog.
///
/// | id | name              | minutes | ingredients                          | tags               |
/// |----|-------------------|---------|--------------------------------------|--------------------|
/// | 0  | Tomato Soup       | 40      | tomato, onion, garlic, salt          | vegetarian, dinner |
/// | 1  | Garlic Bread      | 15      | bread, garlic, butter                | italian, baked     |
/// | 2  | Chicken Curry     | 60      | chicken, onion, garlic, curry powder | indian, spicy      |
/// | 3  | Instant Noodles   | 0       | noodles, garlic                      | snack              |
/// | 4  | Pasta Pomodoro    | 25      | pasta, tomato, garlic, olive oil     | italian, dinner    |
/// | 5  | Onion Rings       | 15      | onion, flour, oil                    | fried, snack       |
#[allow(dead_code)]
pub fn mixed_catalog() -> Catalog {
    Catalog::build(vec![
        raw_row(
            "tomato soup",
            40,
            &["tomato", "onion", "garlic", "salt"],
            &["vegetarian", "dinner"],
        ),
        raw_row(
            "garlic bread",
            15,
            &["bread", "garlic", "butter"],
            &["italian", "baked"],
        ),
        raw_row(
            "chicken curry",
            60,
            &["chicken", "onion", "garlic", "curry powder"],
            &["indian", "spicy"],
        ),
        raw_row("instant noodles", 0, &["noodles", "garlic"], &["snack"]),
        raw_row(
            "pasta pomodoro",
            25,
            &["pasta", "tomato", "garlic", "olive oil"],
            &["italian", "dinner"],
        ),
        raw_row(
            "onion rings",
            15,
            &["onion", "flour", "oil"],
            &["fried", "snack"],
        ),
    ])
}

#[allow(dead_code)]
pub fn engine(catalog: Catalog) -> SearchEngine {
    SearchEngine::build(catalog, DEFAULT_BUCKETS, IndexKind::HashMap)
}

/// Names of the returned recipes, in result order.
#[allow(dead_code)]
pub fn names(results: &SearchResults) -> Vec<&str> {
    results.recipes.iter().map(|hit| hit.name.as_str()).collect()
}

#[allow(dead_code)]
pub const BACKENDS: [IndexKind; 2] = [IndexKind::Trie, IndexKind::HashMap];

/// A CSV document in the `RAW_recipes.csv` layout, including one malformed list field.
#[allow(dead_code)]
pub const SAMPLE_CSV: &str = "\
name,id,minutes,contributor_id,submitted,tags,nutrition,n_steps,steps,description,ingredients,n_ingredients
arriba   baked winter squash mexican style,137739,55,47892,2005-09-16,\"['60-minutes-or-less', 'mexican', 'baked']\",\"[51.5, 0.0]\",2,\"['make a choice and proceed', 'bake until tender']\",autumn is my favorite time of year,\"['winter squash', 'mexican seasoning', 'olive oil']\",3
a bit different  breakfast pizza,31490,30,26278,2002-06-17,\"['breakfast', 'italian']\",\"[173.4, 18.0]\",2,\"['preheat oven to 425 f', 'press dough into pan']\",#NAME?,\"['prepared pizza crust', 'eggs', 'cheddar cheese']\",3
broken lists,99999,20,1,2003-01-01,not a list,\"[]\",,\"['only step']\",,\"['unterminated\",
";
