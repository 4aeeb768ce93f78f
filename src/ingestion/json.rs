//! JSON catalog documents.
//!
//! The expected input is a single object with a `butterflies` array:
//!
//! ```json
//! {"butterflies": [{"GUID": "b-1", "Name": "Monarch", "Wingspan": "9.5", "Abundance": 300, ...}]}
//! ```
//!
//! `Wingspan`, `Weight`, `Price` and `Lifespan` are decimal strings; `Abundance` and
//! `ColorRating` are JSON numbers (or `null`).

use std::fs;
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::{CatalogDocument, Collection};

/// Load a JSON catalog document from a file.
pub fn load_json_from_path(path: impl AsRef<Path>) -> LoadResult<Collection> {
    let text = fs::read_to_string(path)?;
    load_json_from_str(&text)
}

/// Load a JSON catalog document from an in-memory string.
pub fn load_json_from_str(input: &str) -> LoadResult<Collection> {
    if input.trim().is_empty() {
        return Err(LoadError::Format {
            message: "json input is empty".to_string(),
        });
    }

    let doc: CatalogDocument = serde_json::from_str(input)?;
    Ok(Collection::from_document(doc))
}

/// Serialize a collection back into the source document shape.
pub fn to_json_string(collection: &Collection) -> LoadResult<String> {
    Ok(serde_json::to_string_pretty(&collection.to_document())?)
}

/// Write a collection to `path` in the source document shape.
pub fn write_json(path: impl AsRef<Path>, collection: &Collection) -> LoadResult<()> {
    fs::write(path, to_json_string(collection)?)?;
    Ok(())
}
