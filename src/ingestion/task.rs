//! Asynchronous catalog loading (feature `async`).
//!
//! The startup read is the only suspending step: it runs once and produces
//! `Result<Collection, LoadError>`, which the caller hands to
//! [`crate::session::Catalog::finish_load`].

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::Collection;

use super::observability::LoadContext;
use super::unified::{report, resolve_format, CatalogFormat, LoadOptions};
use super::{csv, json};

/// Load a catalog file without blocking the calling task.
///
/// JSON is read with `tokio::fs`; CSV parsing runs on the blocking pool. Observer and logging
/// behavior matches [`super::load`].
pub async fn load_async(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<Collection> {
    let path = path.as_ref().to_path_buf();
    let (format, result) = match resolve_format(&path, options) {
        Ok(CatalogFormat::Json) => {
            let result = match tokio::fs::read_to_string(&path).await {
                Ok(text) => json::load_json_from_str(&text),
                Err(e) => Err(LoadError::Io(e)),
            };
            (Some(CatalogFormat::Json), result)
        }
        Ok(CatalogFormat::Csv) => {
            let p = path.clone();
            let result = tokio::task::spawn_blocking(move || csv::load_csv_from_path(p))
                .await
                .unwrap_or_else(|e| {
                    Err(LoadError::Join {
                        message: e.to_string(),
                    })
                });
            (Some(CatalogFormat::Csv), result)
        }
        Err(e) => (None, Err(e)),
    };

    report(&LoadContext { path, format }, options, &result);
    result
}
