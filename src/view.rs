//! Presentation-side table settings.
//!
//! These never touch the [`crate::types::Collection`]; the shell owns a [`ViewConfig`] and the
//! core only computes what to write into it.

use crate::parse::parse_int;

/// Frozen panes of the table widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewConfig {
    pub fixed_column_count: u32,
    pub fixed_top_row_count: u32,
    pub fixed_bottom_row_count: u32,
}

/// Requested freeze-pane counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreezePanes {
    pub columns: u32,
    pub top_rows: u32,
    pub bottom_rows: u32,
}

impl FreezePanes {
    /// Parse the three free-text dialog inputs.
    ///
    /// Each input is read as a leading base-10 integer. Empty, non-numeric, negative or
    /// out-of-range input counts as `0`.
    pub fn from_inputs(columns: &str, top_rows: &str, bottom_rows: &str) -> Self {
        Self {
            columns: count_or_zero(columns),
            top_rows: count_or_zero(top_rows),
            bottom_rows: count_or_zero(bottom_rows),
        }
    }

    pub fn apply_to(self, config: &mut ViewConfig) {
        config.fixed_column_count = self.columns;
        config.fixed_top_row_count = self.top_rows;
        config.fixed_bottom_row_count = self.bottom_rows;
    }
}

fn count_or_zero(raw: &str) -> u32 {
    let v = parse_int(raw);
    if v.is_nan() || v < 0.0 || v > f64::from(u32::MAX) {
        0
    } else {
        v as u32
    }
}

#[cfg(test)]
mod tests {
    use super::{FreezePanes, ViewConfig};

    #[test]
    fn parses_integer_inputs() {
        let f = FreezePanes::from_inputs("2", " 1", "3 rows");
        assert_eq!(
            f,
            FreezePanes {
                columns: 2,
                top_rows: 1,
                bottom_rows: 3
            }
        );
    }

    #[test]
    fn bad_inputs_default_to_zero() {
        assert_eq!(FreezePanes::from_inputs("", "abc", "-4"), FreezePanes::default());
        assert_eq!(FreezePanes::from_inputs("99999999999", "1.9", "").top_rows, 1);
        assert_eq!(FreezePanes::from_inputs("99999999999", "", "").columns, 0);
    }

    #[test]
    fn apply_overwrites_all_three_counts() {
        let mut config = ViewConfig {
            fixed_column_count: 5,
            fixed_top_row_count: 5,
            fixed_bottom_row_count: 5,
        };
        FreezePanes::from_inputs("1", "", "2").apply_to(&mut config);
        assert_eq!(
            config,
            ViewConfig {
                fixed_column_count: 1,
                fixed_top_row_count: 0,
                fixed_bottom_row_count: 2,
            }
        );
    }
}
