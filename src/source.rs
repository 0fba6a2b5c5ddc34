//! Reads the tabular recipe source (`RAW_recipes.csv`) into raw rows.

use crate::error::SourceError;
use crate::recipe::RawRecipeRow;
use csv::ByteRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Loads every readable row from a CSV file.
///
/// Rows that cannot be deserialized are skipped with a warning. A file that
/// cannot be opened, or that holds no usable rows, is an error.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<RawRecipeRow>, SourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SourceError::Unavailable {
        path: path.display().to_string(),
        source,
    })?;

    let rows = read_rows(BufReader::new(file))?;
    if rows.is_empty() {
        return Err(SourceError::Empty(path.display().to_string()));
    }
    debug!(path = %path.display(), rows = rows.len(), "Read recipe source");
    Ok(rows)
}

/// Columns a [`RawRecipeRow`] is built from, in field order.
const COLUMNS: [&str; 9] = [
    "name",
    "minutes",
    "submitted",
    "tags",
    "n_steps",
    "steps",
    "description",
    "ingredients",
    "n_ingredients",
];

/// Reads rows from any CSV stream with a header line.
///
/// Fields are decoded lossily, so a stray non-UTF-8 byte only garbles that field
/// instead of losing the recipe. Only records the CSV reader cannot split are skipped.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRecipeRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);
    let headers = reader.byte_headers()?.clone();
    let positions = COLUMNS.map(|column| {
        headers
            .iter()
            .position(|header| header == column.as_bytes())
    });

    let mut rows = Vec::new();
    for (position, record) in reader.byte_records().enumerate() {
        match record {
            Ok(record) => rows.push(row_from_record(positions, &record)),
            Err(e) => warn!(row = position, error = %e, "Skipping unreadable recipe row"),
        }
    }
    Ok(rows)
}

fn row_from_record(positions: [Option<usize>; 9], record: &ByteRecord) -> RawRecipeRow {
    let [
        name,
        minutes,
        submitted,
        tags,
        n_steps,
        steps,
        description,
        ingredients,
        n_ingredients,
    ] = positions.map(|position| lossy_field(record, position));

    RawRecipeRow {
        name,
        minutes,
        submitted,
        tags,
        n_steps,
        steps,
        description,
        ingredients,
        n_ingredients,
    }
}

/// An empty or absent field reads as `None`, like an empty CSV cell does through serde.
fn lossy_field(record: &ByteRecord, position: Option<usize>) -> Option<String> {
    let bytes = record.get(position?)?;
    (!bytes.is_empty()).then(|| String::from_utf8_lossy(bytes).into_owned())
}
