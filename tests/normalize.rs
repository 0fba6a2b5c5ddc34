//! Tests for the list parser, the normalizer and catalog construction.
mod common;
use common::*;
use kondate::prelude::*;
use kondate::recipe::parsing::parse_list;
use kondate::recipe::{MISSING_DESCRIPTION, UNNAMED_RECIPE, capitalize, title_case};

#[test]
fn test_parse_list_accepts_python_literals() {
    assert_eq!(parse_list("['a', 'b']"), vec!["a", "b"]);
    assert_eq!(parse_list("[ \"mom's\" ,'x' ]"), vec!["mom's", "x"]);
    assert_eq!(parse_list("['trailing',]"), vec!["trailing"]);
    assert_eq!(parse_list("[]"), Vec::<String>::new());
    assert_eq!(parse_list(r"['it\'s', 'a\\b']"), vec!["it's", "a\\b"]);
}

#[test]
fn test_parse_list_decodes_hex_and_unicode_escapes() {
    assert_eq!(parse_list(r"['café', 'a\x41']"), vec!["café", "aA"]);
    assert_eq!(parse_list(r#"["cr\u00e8me br\u00FBl\u00e9e"]"#), vec!["crème brûlée"]);
    assert_eq!(parse_list(r"['\U0001F336 chili']"), vec!["\u{1F336} chili"]);

    // Short, non-hex or surrogate escapes make the literal malformed.
    for malformed in [r"['\x4']", r"['\xZZ']", r"['\u12']", r"['\ud800']"] {
        assert!(
            parse_list(malformed).is_empty(),
            "expected empty list for {:?}",
            malformed
        );
    }
}

#[test]
fn test_parse_list_falls_back_to_empty() {
    for malformed in [
        "",
        "not a list",
        "['unterminated",
        "[1, 2, 3]",
        "'just a string'",
        "['a' 'b']",
        "['a'] trailing",
        "{'a': 1}",
    ] {
        assert!(
            parse_list(malformed).is_empty(),
            "expected empty list for {:?}",
            malformed
        );
    }
}

#[test]
fn test_text_casing_helpers() {
    assert_eq!(capitalize("hELLO world"), "Hello world");
    assert_eq!(capitalize(""), "");
    assert_eq!(title_case("  arriba   baked squash "), "Arriba Baked Squash");
}

#[test]
fn test_normalize_full_row() {
    let recipe = normalize(raw_row(
        "  garlic   BREAD ",
        15,
        &[" Garlic ", "BREAD", "butter"],
        &["Italian", "baked", "italian"],
    ));

    assert_eq!(recipe.name, "Garlic Bread");
    assert_eq!(recipe.total_time_minutes, 15);
    assert_eq!(recipe.ingredients, vec!["garlic", "bread", "butter"]);
    assert_eq!(
        recipe.display_ingredients(),
        vec!["Garlic", "Bread", "Butter"]
    );
    assert_eq!(
        recipe.tags.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["baked", "italian"]
    );
    assert_eq!(
        recipe.instructions,
        vec!["Mix everything", "Cook until done"]
    );
    assert_eq!(recipe.num_steps, 2);
    assert_eq!(recipe.num_ingredients, 3);
    assert_eq!(recipe.description, "A family favourite");
    assert_eq!(recipe.submitted, "2005-09-16");
}

#[test]
fn test_normalize_empty_row_uses_defaults() {
    let recipe = normalize(RawRecipeRow::default());

    assert_eq!(recipe.name, UNNAMED_RECIPE);
    assert_eq!(recipe.total_time_minutes, 0);
    assert_eq!(recipe.num_steps, 0);
    assert_eq!(recipe.num_ingredients, 0);
    assert!(recipe.tags.is_empty());
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.instructions.is_empty());
    assert_eq!(recipe.description, MISSING_DESCRIPTION);
    assert_eq!(recipe.submitted, "Unknown");
    assert!(!recipe.is_searchable());
}

#[test]
fn test_normalize_description_placeholder_and_sentences() {
    let mut row = RawRecipeRow {
        description: Some("#NAME?".to_string()),
        ..RawRecipeRow::default()
    };
    assert_eq!(normalize(row.clone()).description, MISSING_DESCRIPTION);

    row.description = Some("   ".to_string());
    assert_eq!(normalize(row.clone()).description, MISSING_DESCRIPTION);

    row.description = Some("quick and easy. kids love it. ".to_string());
    assert_eq!(
        normalize(row).description,
        "Quick and easy. Kids love it."
    );
}

#[test]
fn test_normalize_minutes_variants() {
    let minutes = |text: &str| {
        normalize(RawRecipeRow {
            minutes: Some(text.to_string()),
            ..RawRecipeRow::default()
        })
        .total_time_minutes
    };

    assert_eq!(minutes("45"), 45);
    assert_eq!(minutes(" 45 "), 45);
    assert_eq!(minutes("45.0"), 45);
    assert_eq!(minutes("45.5"), 0);
    assert_eq!(minutes("-5"), 0);
    assert_eq!(minutes("soon"), 0);
}

#[test]
fn test_normalize_step_count_reconciliation() {
    let steps = Some(python_list(&["one", "two", "three"]));
    let count = |n_steps: Option<&str>, steps: Option<String>| {
        normalize(RawRecipeRow {
            n_steps: n_steps.map(str::to_string),
            steps,
            ..RawRecipeRow::default()
        })
        .num_steps
    };

    // Source count agrees with the parsed list.
    assert_eq!(count(Some("3"), steps.clone()), 3);
    // Missing or inconsistent counts fall back to the list length.
    assert_eq!(count(None, steps.clone()), 3);
    assert_eq!(count(Some("7"), steps.clone()), 3);
    assert_eq!(count(Some("-1"), steps.clone()), 3);
    // Nothing to check against: trust the source.
    assert_eq!(count(Some("4"), Some("garbage".to_string())), 4);
}

#[test]
fn test_normalize_malformed_lists_are_empty() {
    let recipe = normalize(RawRecipeRow {
        name: Some("broken".to_string()),
        tags: Some("['unterminated".to_string()),
        ingredients: Some("[1, 2]".to_string()),
        steps: Some("step one".to_string()),
        ..RawRecipeRow::default()
    });

    assert_eq!(recipe.name, "Broken");
    assert!(recipe.tags.is_empty());
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.instructions.is_empty());
}

#[test]
fn test_catalog_assigns_ids_by_position() {
    let catalog = mixed_catalog();
    assert_eq!(catalog.len(), 6);

    let ids: Vec<RecipeId> = catalog.all().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(catalog.get(2).map(|r| r.name.as_str()), Some("Chicken Curry"));
    assert!(catalog.get(42).is_none());
}

#[test]
fn test_catalog_from_entries_sorts_and_keeps_last_duplicate() {
    let first = normalize(raw_row("first", 10, &["a"], &[]));
    let second = normalize(raw_row("second", 10, &["b"], &[]));
    let replacement = normalize(raw_row("replacement", 10, &["c"], &[]));

    let catalog = Catalog::from_entries(vec![
        (7, second),
        (3, first),
        (7, replacement),
    ]);

    let entries: Vec<(RecipeId, &str)> = catalog
        .all()
        .map(|(id, recipe)| (id, recipe.name.as_str()))
        .collect();
    assert_eq!(entries, vec![(3, "First"), (7, "Replacement")]);
}
