//! Unified load entry point.
//!
//! Most callers should use [`load`], which reads a catalog file into a [`Collection`].
//!
//! - If [`LoadOptions::format`] is `None`, the format is inferred from the file extension.
//! - If a [`LoadObserver`] is provided, success/failure/alerts are reported to it.
//! - Failures are always logged through `tracing` before being returned.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::Collection;

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};
use super::{csv, json};

/// Where the catalog document lives relative to the application root.
pub const DEFAULT_DATA_PATH: &str = "model/data.json";

/// Supported catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `{"butterflies": [...]}` document.
    Json,
    /// Comma-separated values with the catalog field keys as headers.
    Csv,
}

impl CatalogFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Options controlling [`load`].
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// If `None`, infer the format from the file extension.
    pub format: Option<CatalogFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a catalog file.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with record count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use butterfly_catalog::ingestion::{load, LoadOptions, DEFAULT_DATA_PATH};
///
/// # fn main() -> Result<(), butterfly_catalog::LoadError> {
/// let catalog = load(DEFAULT_DATA_PATH, &LoadOptions::default())?;
/// println!("records={}", catalog.len());
/// # Ok(())
/// # }
/// ```
///
/// Force a format when the extension is missing or misleading:
///
/// ```no_run
/// use butterfly_catalog::ingestion::{load, CatalogFormat, LoadOptions};
///
/// # fn main() -> Result<(), butterfly_catalog::LoadError> {
/// let opts = LoadOptions {
///     format: Some(CatalogFormat::Csv),
///     ..Default::default()
/// };
/// let catalog = load("export.txt", &opts)?;
/// println!("records={}", catalog.len());
/// # Ok(())
/// # }
/// ```
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<Collection> {
    let path = path.as_ref();
    let (format, result) = match resolve_format(path, options) {
        Ok(CatalogFormat::Json) => (Some(CatalogFormat::Json), json::load_json_from_path(path)),
        Ok(CatalogFormat::Csv) => (Some(CatalogFormat::Csv), csv::load_csv_from_path(path)),
        Err(e) => (None, Err(e)),
    };

    report(
        &LoadContext {
            path: path.to_path_buf(),
            format,
        },
        options,
        &result,
    );

    result
}

/// The forced format, or the one inferred from the path's extension.
pub(crate) fn resolve_format(path: &Path, options: &LoadOptions) -> LoadResult<CatalogFormat> {
    match options.format {
        Some(f) => Ok(f),
        None => infer_format_from_path(path),
    }
}

/// Log a load outcome and forward it to the configured observer.
pub(crate) fn report(ctx: &LoadContext, options: &LoadOptions, result: &LoadResult<Collection>) {
    match result {
        Ok(c) => tracing::debug!(
            path = %ctx.path.display(),
            format = ctx.format_tag(),
            records = c.len(),
            "catalog loaded"
        ),
        Err(e) => tracing::error!(
            path = %ctx.path.display(),
            format = ctx.format_tag(),
            error = %e,
            "failed to load catalog"
        ),
    }

    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(c) => obs.on_success(ctx, LoadStats { records: c.len() }),
        Err(e) => {
            let sev = LoadSeverity::for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}

pub(crate) fn infer_format_from_path(path: &Path) -> LoadResult<CatalogFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LoadError::Format {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    CatalogFormat::from_extension(ext).ok_or_else(|| LoadError::Format {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

/// An owned load request, for callers that hand the load to a job or task.
#[derive(Clone)]
pub struct LoadRequest {
    /// Path to the catalog file.
    pub path: PathBuf,
    /// Options controlling the load.
    pub options: LoadOptions,
}

impl fmt::Debug for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl LoadRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: LoadOptions::default(),
        }
    }

    /// Execute the request by calling [`load`].
    pub fn run(&self) -> LoadResult<Collection> {
        load(&self.path, &self.options)
    }
}
