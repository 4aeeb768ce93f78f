//! Catalog loading.
//!
//! Most callers should use [`load`] (from [`unified`]) which:
//!
//! - auto-detects JSON or CSV by file extension (or you can override via [`LoadOptions`])
//! - converts string-typed numeric fields into numbers
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Format-specific functions are also available under [`json`] and [`csv`].

pub mod csv;
pub mod json;
pub mod observability;
#[cfg(feature = "async")]
pub mod task;
pub mod unified;

pub use json::{load_json_from_str, to_json_string, write_json};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver,
};
#[cfg(feature = "async")]
pub use task::load_async;
pub use unified::{load, CatalogFormat, LoadOptions, LoadRequest, DEFAULT_DATA_PATH};
