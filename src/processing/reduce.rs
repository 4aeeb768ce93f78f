//! Column totals.

use std::fmt;

use crate::columns::ColumnRef;
use crate::types::Collection;

/// Display form of a column that cannot be summed.
pub const NOT_SUMMABLE: &str = "-----------------";

/// Result of [`column_sum`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnSum {
    /// Every value was a number.
    Total(f64),
    /// At least one value was text, empty or `NaN`.
    NotSummable,
}

impl ColumnSum {
    pub fn total(self) -> Option<f64> {
        match self {
            ColumnSum::Total(v) => Some(v),
            ColumnSum::NotSummable => None,
        }
    }
}

impl fmt::Display for ColumnSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSum::Total(v) => write!(f, "{v}"),
            ColumnSum::NotSummable => f.write_str(NOT_SUMMABLE),
        }
    }
}

/// Sum `column` across all records.
///
/// - Returns [`ColumnSum::NotSummable`] as soon as a value is not a number: text columns,
///   empty (`None`) cells and `NaN` cells all qualify.
/// - An empty collection sums to `Total(0.0)` for any column.
pub fn column_sum(collection: &Collection, column: ColumnRef) -> ColumnSum {
    let mut total = 0.0;
    for record in collection {
        let value = match column {
            ColumnRef::Numeric(c) => c.get(record),
            ColumnRef::Text(_) => None,
        };
        match value {
            Some(v) if !v.is_nan() => total += v,
            _ => return ColumnSum::NotSummable,
        }
    }
    ColumnSum::Total(total)
}
