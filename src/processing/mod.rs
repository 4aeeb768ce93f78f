//! Catalog edits and queries.
//!
//! Every operation takes the current [`crate::types::Collection`] by reference and returns a new
//! one (or a value); nothing here touches the store. Write results back with
//! [`crate::store::RecordStore::set`].
//!
//! - [`insert_empty_row`], [`duplicate_row`], [`delete_rows`]: row edits
//! - [`transform_column`]: bulk column edit
//! - [`column_sum`]: column total
//! - [`search`] / [`search_view`]: free-text filtering
//!
//! ## Example: delete → transform → sum
//!
//! ```rust
//! use butterfly_catalog::columns::ColumnRef;
//! use butterfly_catalog::processing::{column_sum, delete_rows, transform_column, ColumnSum, EditOptions};
//! use butterfly_catalog::types::{Collection, Record};
//!
//! let catalog: Collection = [1.0, 2.0, 4.0]
//!     .into_iter()
//!     .map(|p| Record { price: Some(p), ..Record::default() })
//!     .collect();
//!
//! let kept = delete_rows(&catalog, &[1]).unwrap();
//! let price: ColumnRef = "Price".parse().unwrap();
//! let edited = transform_column(&kept, price, &EditOptions { numeric_factor: 2.0, ..Default::default() });
//!
//! assert_eq!(column_sum(&edited, price), ColumnSum::Total(10.0));
//! ```

pub mod filter;
pub mod map;
pub mod reduce;
pub mod rows;

pub use filter::{search, search_view, RowView, SearchOptions, SearchQuery};
pub use map::{transform_column, EditOptions};
pub use reduce::{column_sum, ColumnSum, NOT_SUMMABLE};
pub use rows::{delete_rows, duplicate_row, insert_empty_row};
