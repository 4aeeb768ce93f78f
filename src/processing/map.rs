//! Bulk column edits.

use crate::columns::ColumnRef;
use crate::types::Collection;

/// Parameters of a bulk column edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOptions {
    /// Multiplier applied to numeric columns.
    pub numeric_factor: f64,
    /// Suffix appended to text columns.
    pub text_suffix: String,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            numeric_factor: 3.3,
            text_suffix: " ed.".to_string(),
        }
    }
}

/// Returns a copy of `collection` with `column` edited in every record.
///
/// - Numeric columns are multiplied by [`EditOptions::numeric_factor`]. An empty (`None`) cell
///   counts as `0` and comes out as `Some(0.0)`; `NaN` stays `NaN`.
/// - Text columns get [`EditOptions::text_suffix`] appended.
///
/// Every other field is left untouched.
pub fn transform_column(collection: &Collection, column: ColumnRef, options: &EditOptions) -> Collection {
    match column {
        ColumnRef::Numeric(c) => collection.map_records(|r| {
            let cell = c.get_mut(r);
            *cell = Some(cell.unwrap_or(0.0) * options.numeric_factor);
        }),
        ColumnRef::Text(c) => collection.map_records(|r| c.get_mut(r).push_str(&options.text_suffix)),
    }
}
