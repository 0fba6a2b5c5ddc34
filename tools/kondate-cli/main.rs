use clap::{Parser, Subcommand, ValueEnum};
use kondate::index::build_index;
use kondate::prelude::*;
use kondate::source;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendCli {
    Trie,
    Hashmap,
}

impl From<BackendCli> for IndexKind {
    fn from(backend: BackendCli) -> Self {
        match backend {
            BackendCli::Trie => IndexKind::Trie,
            BackendCli::Hashmap => IndexKind::HashMap,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortCli {
    MatchedIngredients,
    MissingIngredients,
    TotalTime,
    NumSteps,
}

impl From<SortCli> for SortKey {
    fn from(sort: SortCli) -> Self {
        match sort {
            SortCli::MatchedIngredients => SortKey::MatchedIngredients,
            SortCli::MissingIngredients => SortKey::MissingIngredients,
            SortCli::TotalTime => SortKey::TotalTime,
            SortCli::NumSteps => SortKey::NumSteps,
        }
    }
}

/// Search a recipe catalog from the command line, or build its snapshot
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the raw recipe CSV
    #[arg(short, long, default_value = "RAW_recipes.csv", global = true)]
    data: PathBuf,

    /// Load the catalog from this snapshot instead of the CSV
    #[arg(short, long, global = true)]
    snapshot: Option<PathBuf>,

    /// Number of hash-table buckets
    #[arg(long, default_value_t = DEFAULT_BUCKETS, global = true)]
    buckets: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find recipes using some of the given ingredients
    Search {
        /// Ingredients to match (only the first 10 are used)
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Restrict to recipes carrying at least one of these tags
        #[arg(short, long)]
        tag: Vec<String>,

        #[arg(long, value_enum, default_value_t = SortCli::MatchedIngredients)]
        sort_by: SortCli,

        /// The index backend to use
        #[arg(short, long, value_enum, default_value_t = BackendCli::Hashmap)]
        backend: BackendCli,

        #[arg(long)]
        max_minutes: Option<u64>,
    },
    /// Show the full record of a recipe by exact name
    Lookup {
        name: String,

        #[arg(short, long, value_enum, default_value_t = BackendCli::Trie)]
        backend: BackendCli,
    },
    /// Build the catalog from the CSV and write a snapshot for fast startup
    Snapshot {
        /// Where to write the snapshot
        #[arg(short, long, default_value = "recipe_map.bin")]
        output: PathBuf,
    },
    /// Print catalog and index statistics
    Stats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig {
        data_path: cli.data.clone(),
        snapshot_path: cli.snapshot.clone(),
        hash_buckets: cli.buckets.max(1),
        ..ServiceConfig::default()
    };

    match cli.command {
        Command::Search {
            ingredients,
            tag,
            sort_by,
            backend,
            max_minutes,
        } => {
            let engine = load_engine(&config);
            let mut request = SearchRequest::new(ingredients)
                .with_tags(tag)
                .sorted_by(sort_by.into())
                .using(backend.into());
            request.max_minutes = max_minutes;
            run_search(&engine, &request);
        }
        Command::Lookup { name, backend } => {
            let engine = load_engine(&config);
            match engine.recipe_detail(backend.into(), &name) {
                Ok(detail) => print_json(&detail),
                Err(e) => exit_with_error(&e.to_string()),
            }
        }
        Command::Snapshot { output } => write_snapshot(&config, &output),
        Command::Stats => {
            let engine = load_engine(&config);
            print_stats(&engine);
        }
    }
}

fn load_engine(config: &ServiceConfig) -> SearchEngine {
    let start = Instant::now();
    let catalog = kondate::service::load_catalog(config);
    let engine = SearchEngine::build(catalog, config.hash_buckets, config.default_backend);
    eprintln!(
        "Indexed {} recipes in {:?}",
        engine.catalog().len(),
        start.elapsed()
    );
    engine
}

fn run_search(engine: &SearchEngine, request: &SearchRequest) {
    let start = Instant::now();
    match engine.search(request) {
        Ok(results) => {
            eprintln!(
                "{} match(es) in {:?}",
                results.total_matches,
                start.elapsed()
            );
            print_json(&results);
        }
        Err(QueryError::NotFound(e)) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
        Err(e) => exit_with_error(&e.to_string()),
    }
}

/// The offline snapshot step: raw CSV -> catalog -> hash index -> bincode file.
fn write_snapshot(config: &ServiceConfig, output: &PathBuf) {
    let start = Instant::now();
    let rows = source::load_rows(&config.data_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read '{}': {}",
            config.data_path.display(),
            e
        ))
    });
    let catalog = Catalog::build(rows);
    let index = build_index(IndexKind::HashMap, &catalog, config.hash_buckets);
    println!("Total number of entries in the hash map: {}", index.count());

    let snapshot = CatalogSnapshot::from_index(index.as_ref());
    snapshot
        .save(output)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save snapshot: {}", e)));
    println!(
        "Snapshot with {} recipes saved to '{}' in {:?}",
        snapshot.len(),
        output.display(),
        start.elapsed()
    );
}

fn print_stats(engine: &SearchEngine) {
    let catalog = engine.catalog();
    let incomplete = catalog
        .all()
        .filter(|(_, recipe)| !recipe.is_searchable())
        .count();
    let unnamed = catalog
        .all()
        .filter(|(_, recipe)| recipe.name == kondate::recipe::UNNAMED_RECIPE)
        .count();

    println!("--- Catalog Summary ---");
    println!("Recipes:              {}", catalog.len());
    println!("Without total time:   {}", incomplete);
    println!("Unnamed:              {}", unnamed);
    println!("\n--- Index Summary ---");
    for kind in [IndexKind::Trie, IndexKind::HashMap] {
        println!("{:<8} {} recipes", kind, engine.index(kind).count());
    }
    println!("Default backend:      {}", engine.default_backend());
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to render output: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
