//! Shell-facing catalog session.
//!
//! [`Catalog`] ties the pieces together the way a table front-end uses them: it owns the
//! [`RecordStore`], remembers the active search query, and refuses edits until a load has
//! succeeded. Row selections are given in *view* coordinates (positions in the currently
//! filtered table) and mapped back to collection indices before any edit.
//!
//! ```rust
//! use butterfly_catalog::session::Catalog;
//! use butterfly_catalog::types::{Collection, Record};
//!
//! # fn main() -> Result<(), butterfly_catalog::CatalogError> {
//! let mut catalog = Catalog::default();
//! catalog.finish_load(Ok(Collection::new(vec![Record { name: "Monarch".into(), ..Record::default() }])))?;
//!
//! let new_row = catalog.insert_empty_row()?;
//! assert_eq!(new_row, 1);
//!
//! catalog.set_query("Monarch");
//! catalog.duplicate_row(&[0])?;
//! assert_eq!(catalog.visible_rows()?.len(), 2);
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::columns::ColumnRef;
use crate::error::{CatalogError, LoadResult, PreconditionError};
use crate::ingestion::{self, LoadOptions};
use crate::processing::{self, ColumnSum, EditOptions, RowView, SearchOptions};
use crate::store::{RecordStore, StoreObserver};
use crate::types::Collection;
use crate::view::{FreezePanes, ViewConfig};

#[derive(Debug, Default)]
pub struct Catalog {
    store: RecordStore,
    loaded: bool,
    query: String,
    edit_options: EditOptions,
    search_options: SearchOptions,
    view_config: ViewConfig,
}

impl Catalog {
    pub fn new(edit_options: EditOptions, search_options: SearchOptions) -> Self {
        Self {
            edit_options,
            search_options,
            ..Self::default()
        }
    }

    /// Register a view to refresh after every write.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) {
        self.store.subscribe(observer);
    }

    /// Load a catalog file and install it. See [`Self::finish_load`].
    pub fn load(&mut self, path: impl AsRef<Path>, options: &LoadOptions) -> Result<usize, CatalogError> {
        self.finish_load(ingestion::load(path, options))
    }

    /// Install the outcome of a load.
    ///
    /// On success the collection replaces whatever was loaded before and the record count is
    /// returned. On failure the previous model (or the absence of one) is kept.
    pub fn finish_load(&mut self, result: LoadResult<Collection>) -> Result<usize, CatalogError> {
        let collection = result?;
        let n = collection.len();
        self.store.set(collection);
        self.loaded = true;
        Ok(n)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The full collection, ignoring the active query.
    pub fn get(&self) -> Result<&Collection, CatalogError> {
        self.ensure_loaded()?;
        Ok(self.store.get())
    }

    /// Replace the collection.
    pub fn set(&mut self, collection: Collection) -> Result<(), CatalogError> {
        self.ensure_loaded()?;
        self.store.set(collection);
        Ok(())
    }

    /// Number of writes since the session started.
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Set the free-text query. An empty query shows every row.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Positions of the rows the table currently shows.
    pub fn view(&self) -> Result<RowView, CatalogError> {
        Ok(processing::search_view(self.get()?, &self.query, &self.search_options))
    }

    /// The rows the table currently shows, in order.
    pub fn visible_rows(&self) -> Result<Collection, CatalogError> {
        Ok(processing::search(self.get()?, &self.query, &self.search_options))
    }

    /// Append an empty row and return its collection index (the row to scroll to).
    pub fn insert_empty_row(&mut self) -> Result<usize, CatalogError> {
        let next = processing::insert_empty_row(self.get()?);
        let index = next.len() - 1;
        self.store.set(next);
        Ok(index)
    }

    /// Duplicate the single selected view row. Returns the collection index of the copy.
    pub fn duplicate_row(&mut self, selected: &[usize]) -> Result<usize, CatalogError> {
        if selected.len() != 1 {
            return Err(self.warn(PreconditionError::DuplicateSelection {
                selected: selected.len(),
            }));
        }
        let indices = self.resolve_selection(selected)?;
        let next = processing::duplicate_row(self.store.get(), &indices).map_err(|e| self.warn(e))?;
        self.store.set(next);
        Ok(indices[0] + 1)
    }

    /// Delete the selected view rows. Returns the number of removed records.
    pub fn delete_rows(&mut self, selected: &[usize]) -> Result<usize, CatalogError> {
        if selected.is_empty() {
            return Err(self.warn(PreconditionError::EmptySelection));
        }
        let indices = self.resolve_selection(selected)?;
        let before = self.store.get().len();
        let next = processing::delete_rows(self.store.get(), &indices).map_err(|e| self.warn(e))?;
        let removed = before - next.len();
        self.store.set(next);
        Ok(removed)
    }

    /// Apply the bulk edit to `column` in every record (selection and query are ignored).
    pub fn transform_column(&mut self, column: &str) -> Result<(), CatalogError> {
        let column: ColumnRef = column.parse()?;
        let next = processing::transform_column(self.get()?, column, &self.edit_options);
        self.store.set(next);
        Ok(())
    }

    /// Total of `column` over the whole collection.
    pub fn column_sum(&self, column: &str) -> Result<ColumnSum, CatalogError> {
        let column: ColumnRef = column.parse()?;
        Ok(processing::column_sum(self.get()?, column))
    }

    /// Parse the freeze-pane inputs and store them in the table's view configuration.
    ///
    /// This is presentation state; it works whether or not a catalog is loaded.
    pub fn freeze_panes(&mut self, columns: &str, top_rows: &str, bottom_rows: &str) -> FreezePanes {
        let panes = FreezePanes::from_inputs(columns, top_rows, bottom_rows);
        panes.apply_to(&mut self.view_config);
        tracing::debug!(
            columns = panes.columns,
            top_rows = panes.top_rows,
            bottom_rows = panes.bottom_rows,
            "freeze panes updated"
        );
        panes
    }

    /// Current fixed column/row counts for the table widget.
    pub fn view_config(&self) -> ViewConfig {
        self.view_config
    }

    fn ensure_loaded(&self) -> Result<(), CatalogError> {
        if self.loaded {
            Ok(())
        } else {
            Err(CatalogError::NotLoaded)
        }
    }

    fn resolve_selection(&self, selected: &[usize]) -> Result<Vec<usize>, CatalogError> {
        let view = self.view()?;
        selected
            .iter()
            .map(|&row| {
                view.source_index(row).ok_or_else(|| {
                    self.warn(PreconditionError::IndexOutOfRange {
                        index: row,
                        len: view.len(),
                    })
                })
            })
            .collect()
    }

    fn warn(&self, e: PreconditionError) -> CatalogError {
        tracing::warn!(error = %e, query = %self.query, "row operation rejected");
        CatalogError::Precondition(e)
    }
}
