//! Free-text search over a [`Collection`].
//!
//! A non-empty query matches a record when any of these holds:
//!
//! - a text column contains the query (case-insensitive unless configured otherwise)
//! - `Abundance` equals the query's leading integer
//! - any other numeric column equals the query's leading decimal number
//!
//! A query with no numeric prefix parses to `NaN`, which never equals anything, so only the
//! text branches can match it.

use crate::columns::{NumericColumn, TextColumn};
use crate::parse::{parse_float, parse_int};
use crate::types::{Collection, Record};

/// Options controlling search matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Compare text columns case-sensitively.
    pub case_sensitive: bool,
}

/// A compiled search predicate.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    needle: Option<String>,
    case_sensitive: bool,
    as_float: f64,
    as_int: f64,
}

impl SearchQuery {
    pub fn new(query: &str, options: &SearchOptions) -> Self {
        let needle = if query.is_empty() {
            None
        } else if options.case_sensitive {
            Some(query.to_string())
        } else {
            Some(query.to_lowercase())
        };

        Self {
            needle,
            case_sensitive: options.case_sensitive,
            as_float: parse_float(query),
            as_int: parse_int(query),
        }
    }

    /// Whether the query filters anything at all.
    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches(&self, record: &Record) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };

        let text_hit = TextColumn::ALL.iter().any(|c| {
            let value = c.get(record);
            if self.case_sensitive {
                value.contains(needle)
            } else {
                value.to_lowercase().contains(needle)
            }
        });

        text_hit
            || NumericColumn::ALL.iter().any(|&c| {
                let target = if c.is_integral() { self.as_int } else { self.as_float };
                c.get(record) == Some(target)
            })
    }
}

/// Returns the records matching `query`, in original order.
///
/// An empty query returns the whole collection. `collection` is not modified.
pub fn search(collection: &Collection, query: &str, options: &SearchOptions) -> Collection {
    let q = SearchQuery::new(query, options);
    if q.is_empty() {
        return collection.clone();
    }
    collection.filter_records(|r| q.matches(r))
}

/// Returns the positions of the records matching `query`.
pub fn search_view(collection: &Collection, query: &str, options: &SearchOptions) -> RowView {
    let q = SearchQuery::new(query, options);
    let indices = collection
        .iter()
        .enumerate()
        .filter(|(_, r)| q.matches(r))
        .map(|(i, _)| i)
        .collect();
    RowView { indices }
}

/// A filtered view of a collection: view row `n` is collection row `indices[n]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowView {
    indices: Vec<usize>,
}

impl RowView {
    /// A view showing every row of a collection of `len` records.
    pub fn identity(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Collection index of a view row.
    pub fn source_index(&self, view_row: usize) -> Option<usize> {
        self.indices.get(view_row).copied()
    }

    /// Map selected view rows to collection indices. Rows outside the view are dropped.
    pub fn resolve(&self, view_rows: &[usize]) -> Vec<usize> {
        view_rows
            .iter()
            .filter_map(|&r| self.source_index(r))
            .collect()
    }

    /// Materialize the view rows from `collection`.
    pub fn rows(&self, collection: &Collection) -> Collection {
        self.indices
            .iter()
            .filter_map(|&i| collection.get(i).cloned())
            .collect()
    }
}
