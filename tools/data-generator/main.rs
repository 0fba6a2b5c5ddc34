use clap::Parser;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// A CLI tool to generate a synthetic recipe CSV in the `RAW_recipes.csv` layout
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated CSV file to
    #[arg(short, long, default_value = "generated_recipes.csv")]
    output: String,

    /// Number of recipes to generate
    #[arg(short, long, default_value_t = 500)]
    count: usize,

    /// Share of rows (0.0 - 1.0) that get a deliberately malformed field
    #[arg(long, default_value_t = 0.05)]
    defect_rate: f64,
}

const DISHES: [&str; 12] = [
    "pasta bake",
    "stir fry",
    "soup",
    "salad",
    "curry",
    "tacos",
    "omelette",
    "risotto",
    "casserole",
    "noodles",
    "pancakes",
    "skewers",
];

const INGREDIENTS: [&str; 24] = [
    "pasta",
    "tomato",
    "garlic",
    "onion",
    "olive oil",
    "salt",
    "black pepper",
    "chicken",
    "rice",
    "eggs",
    "butter",
    "flour",
    "milk",
    "cheddar cheese",
    "parmesan cheese",
    "soy sauce",
    "ginger",
    "carrot",
    "potato",
    "beef",
    "lime",
    "cilantro",
    "black beans",
    "sugar",
];

const TAGS: [&str; 16] = [
    "italian",
    "mexican",
    "indian",
    "chinese",
    "thai",
    "vegetarian",
    "vegan",
    "dinner",
    "lunch",
    "breakfast",
    "dessert",
    "baked",
    "spicy",
    "sweet",
    "60-minutes-or-less",
    "easy",
];

const STEPS: [&str; 8] = [
    "preheat the oven",
    "chop the vegetables",
    "heat the oil in a large pan",
    "season to taste",
    "bring a pot of water to a boil",
    "stir in the sauce",
    "simmer for 10 minutes",
    "serve hot",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.defect_rate) {
        eprintln!(
            "Error: --defect-rate ({}) must be between 0.0 and 1.0",
            cli.defect_rate
        );
        std::process::exit(1);
    }

    println!("Generating {} recipes...", cli.count);

    let mut rng = rand::rng();
    let mut writer = csv::Writer::from_path(&cli.output)?;
    writer.write_record([
        "name",
        "id",
        "minutes",
        "contributor_id",
        "submitted",
        "tags",
        "nutrition",
        "n_steps",
        "steps",
        "description",
        "ingredients",
        "n_ingredients",
    ])?;

    let mut defects = 0;
    for id in 0..cli.count {
        let mut row = generate_row(&mut rng, id);
        if rng.random_bool(cli.defect_rate) {
            inject_defect(&mut rng, &mut row);
            defects += 1;
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;

    println!(
        "Successfully generated {} recipes ({} with defects) and saved them to '{}'",
        cli.count, defects, cli.output
    );

    Ok(())
}

fn generate_row(rng: &mut impl Rng, id: usize) -> Vec<String> {
    let main = INGREDIENTS.choose(rng).copied().unwrap_or("rice");
    let dish = DISHES.choose(rng).copied().unwrap_or("soup");

    let ingredient_count = rng.random_range(2..=8);
    let mut ingredients: Vec<&str> = INGREDIENTS
        .choose_multiple(rng, ingredient_count)
        .copied()
        .collect();
    if !ingredients.contains(&main) {
        ingredients.push(main);
    }
    ingredients.shuffle(rng);

    let tag_count = rng.random_range(1..=4);
    let tags: Vec<&str> = TAGS.choose_multiple(rng, tag_count).copied().collect();

    let step_count = rng.random_range(1..=STEPS.len());
    let steps: Vec<&str> = STEPS.iter().take(step_count).copied().collect();

    vec![
        format!("{} {}", main, dish),
        (100_000 + id).to_string(),
        rng.random_range(5..=180).to_string(),
        rng.random_range(1_000..99_999).to_string(),
        format!(
            "20{:02}-{:02}-{:02}",
            rng.random_range(0..=18),
            rng.random_range(1..=12),
            rng.random_range(1..=28)
        ),
        python_list(&tags),
        "[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]".to_string(),
        steps.len().to_string(),
        python_list(&steps),
        format!("a simple {} for any day. tastes great", dish),
        python_list(&ingredients),
        ingredients.len().to_string(),
    ]
}

/// Breaks one field the way real exports do.
fn inject_defect(rng: &mut impl Rng, row: &mut [String]) {
    match rng.random_range(0..5) {
        0 => row[2] = String::new(), // missing minutes
        1 => row[2] = "0".to_string(), // zero minutes
        2 => row[9] = "#NAME?".to_string(), // spreadsheet placeholder
        3 => row[10] = "['unterminated".to_string(), // malformed list
        _ => row[0] = String::new(), // missing name
    }
}

fn python_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}
