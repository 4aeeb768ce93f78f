//! CSV catalog sources.

use std::path::Path;

use crate::columns::ColumnRef;
use crate::error::{LoadError, LoadResult};
use crate::types::{Collection, RawRecord, Record};

/// Load a CSV catalog file into a [`Collection`].
///
/// Rules:
///
/// - The file must have a header row.
/// - Headers must contain all 14 field keys (`GUID`, `Name`, ..., `ThreatLevel`); order can differ.
/// - `Wingspan`, `Weight`, `Price`, `Lifespan` are read as text and parsed like JSON sources.
/// - Empty `Abundance` / `ColorRating` cells load as `None`.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> LoadResult<Collection> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<Collection> {
    let headers = rdr.headers()?.clone();

    for column in ColumnRef::all() {
        if !headers.iter().any(|h| h == column.key()) {
            return Err(LoadError::Format {
                message: format!(
                    "missing required column '{}'. headers={:?}",
                    column.key(),
                    headers.iter().collect::<Vec<_>>()
                ),
            });
        }
    }

    let mut records = Vec::new();
    for result in rdr.deserialize::<RawRecord>() {
        records.push(Record::from(result?));
    }

    Ok(Collection::new(records))
}
