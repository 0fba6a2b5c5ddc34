use thiserror::Error;

/// Errors raised while validating a search request, before any index is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ingredients are required")]
    MissingIngredients,

    #[error("No ingredients provided")]
    EmptyIngredients,

    #[error("Invalid tags provided: {}", .0.join(", "))]
    InvalidTags(Vec<String>),

    #[error("Invalid sort key '{0}', expected one of: matched_ingredients, missing_ingredients, total_time, num_steps")]
    InvalidSortKey(String),

    #[error("Invalid data structure '{0}', expected 'trie' or 'hashmap'")]
    InvalidBackend(String),

    #[error("Invalid data structure: select 'trie' or 'hashmap'")]
    MissingBackend,

    /// The request body could not be read as a search request.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

/// A valid request that produced nothing to return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("No recipes found for the given ingredients.")]
    NoMatches,

    #[error("Recipe not found")]
    Recipe(String),
}

/// Everything a query against the engine can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Errors that can occur while reading the tabular recipe source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Could not open recipe source '{path}': {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Recipe source '{0}' contains no rows")]
    Empty(String),

    #[error("Failed to read recipe source: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that can occur while writing or reading a catalog snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed: {0}")]
    Io(String),

    #[error("Snapshot serialization failed: {0}")]
    Encode(String),

    #[error("Snapshot deserialization failed: {0}")]
    Decode(String),
}
