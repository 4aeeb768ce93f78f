use thiserror::Error;

/// Convenience result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by catalog loading.
///
/// Shared across JSON and CSV sources (and the optional async loader).
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON payload is malformed or does not have the catalog document shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV source error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The source cannot be interpreted as a catalog (unknown extension, missing column, etc.).
    #[error("format error: {message}")]
    Format { message: String },

    /// The background load task did not complete.
    #[error("load task failed: {message}")]
    Join { message: String },
}

/// A row operation was requested with a selection it cannot act on.
///
/// These are user-facing warnings: the operation is aborted and no state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// Nothing is selected.
    #[error("no rows selected")]
    EmptySelection,

    /// Duplication needs exactly one selected row.
    #[error("exactly one row must be selected to duplicate (selected {selected})")]
    DuplicateSelection { selected: usize },

    /// A selected index does not address a row.
    #[error("row index {index} is out of range for {len} rows")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A column name outside the catalog's closed column set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    #[error("unknown column '{name}'")]
    Unknown { name: String },
}

/// Error type returned by [`crate::session::Catalog`] operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Mutations are only available after a successful load.
    #[error("catalog is not loaded")]
    NotLoaded,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Column(#[from] ColumnError),
}
