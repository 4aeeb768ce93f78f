//! `butterfly-catalog` is the in-memory core of a butterfly catalog data grid.
//!
//! It loads a catalog document into an ordered [`types::Collection`], keeps it in a
//! [`store::RecordStore`], and provides the bulk edits and queries a table front-end offers:
//! add empty row, duplicate row, delete rows, bulk column edit, column sum, freeze panes and
//! free-text search. Rendering, dialogs and localized messages belong to the embedding UI.
//!
//! ## Loading
//!
//! The source document is a JSON object with a `butterflies` array. `Wingspan`, `Weight`,
//! `Price` and `Lifespan` arrive as decimal strings and are converted to numbers; a string that
//! does not start with a number becomes `NaN` rather than an error. CSV files with the same field
//! names are accepted too (see [`ingestion`]).
//!
//! ```no_run
//! use butterfly_catalog::ingestion::{load, LoadOptions, DEFAULT_DATA_PATH};
//!
//! # fn main() -> Result<(), butterfly_catalog::LoadError> {
//! let catalog = load(DEFAULT_DATA_PATH, &LoadOptions::default())?;
//! println!("records={}", catalog.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Editing
//!
//! ```rust
//! use butterfly_catalog::processing::{column_sum, duplicate_row, search, ColumnSum, SearchOptions};
//! use butterfly_catalog::types::{Collection, Record};
//!
//! let catalog = Collection::new(vec![
//!     Record { name: "Monarch".into(), price: Some(1.5), ..Record::default() },
//!     Record { name: "Swallowtail".into(), price: Some(2.5), ..Record::default() },
//! ]);
//!
//! let doubled = duplicate_row(&catalog, &[0]).unwrap();
//! assert_eq!(doubled.len(), 3);
//!
//! let price = "Price".parse().unwrap();
//! assert_eq!(column_sum(&catalog, price), ColumnSum::Total(4.0));
//!
//! let hits = search(&catalog, "Monarch", &SearchOptions::default());
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: JSON/CSV loading, load observers, re-serialization
//! - [`types`]: records and the collection
//! - [`columns`]: the closed column set
//! - [`store`]: the record store and refresh notifications
//! - [`processing`]: row edits, column edits, sums and search
//! - [`view`]: freeze-pane settings
//! - [`session`]: the shell-facing [`session::Catalog`]
//! - [`error`]: error types

pub mod columns;
pub mod error;
pub mod ingestion;
pub mod parse;
pub mod processing;
pub mod session;
pub mod store;
pub mod types;
pub mod view;

pub use error::{CatalogError, ColumnError, LoadError, LoadResult, PreconditionError};
pub use session::Catalog;
