//! The catalog's closed column set.
//!
//! Columns are named once, at the boundary, and from then on carried as a [`ColumnRef`]. Every
//! per-record access is a `match`, so there is no "unknown column" case past parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::ColumnError;
use crate::types::Record;

/// Numeric (nullable `f64`) columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericColumn {
    Wingspan,
    Weight,
    Price,
    Lifespan,
    Abundance,
    ColorRating,
}

/// Free-text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColumn {
    Guid,
    Name,
    Family,
    Location,
    Date,
    Habitat,
    MigrationPattern,
    ThreatLevel,
}

/// A reference to one catalog column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRef {
    Numeric(NumericColumn),
    Text(TextColumn),
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 6] = [
        NumericColumn::Wingspan,
        NumericColumn::Weight,
        NumericColumn::Price,
        NumericColumn::Lifespan,
        NumericColumn::Abundance,
        NumericColumn::ColorRating,
    ];

    /// Field key as it appears in the source document.
    pub fn key(self) -> &'static str {
        match self {
            NumericColumn::Wingspan => "Wingspan",
            NumericColumn::Weight => "Weight",
            NumericColumn::Price => "Price",
            NumericColumn::Lifespan => "Lifespan",
            NumericColumn::Abundance => "Abundance",
            NumericColumn::ColorRating => "ColorRating",
        }
    }

    /// Human-readable column header.
    pub fn label(self) -> &'static str {
        match self {
            NumericColumn::ColorRating => "Color Rating",
            other => other.key(),
        }
    }

    /// Whether values of this column are whole numbers in the source data.
    pub fn is_integral(self) -> bool {
        matches!(self, NumericColumn::Abundance)
    }

    pub fn get(self, record: &Record) -> Option<f64> {
        match self {
            NumericColumn::Wingspan => record.wingspan,
            NumericColumn::Weight => record.weight,
            NumericColumn::Price => record.price,
            NumericColumn::Lifespan => record.lifespan,
            NumericColumn::Abundance => record.abundance,
            NumericColumn::ColorRating => record.color_rating,
        }
    }

    pub fn get_mut(self, record: &mut Record) -> &mut Option<f64> {
        match self {
            NumericColumn::Wingspan => &mut record.wingspan,
            NumericColumn::Weight => &mut record.weight,
            NumericColumn::Price => &mut record.price,
            NumericColumn::Lifespan => &mut record.lifespan,
            NumericColumn::Abundance => &mut record.abundance,
            NumericColumn::ColorRating => &mut record.color_rating,
        }
    }
}

impl TextColumn {
    pub const ALL: [TextColumn; 8] = [
        TextColumn::Guid,
        TextColumn::Name,
        TextColumn::Family,
        TextColumn::Location,
        TextColumn::Date,
        TextColumn::Habitat,
        TextColumn::MigrationPattern,
        TextColumn::ThreatLevel,
    ];

    /// Field key as it appears in the source document.
    pub fn key(self) -> &'static str {
        match self {
            TextColumn::Guid => "GUID",
            TextColumn::Name => "Name",
            TextColumn::Family => "Family",
            TextColumn::Location => "Location",
            TextColumn::Date => "Date",
            TextColumn::Habitat => "Habitat",
            TextColumn::MigrationPattern => "MigrationPattern",
            TextColumn::ThreatLevel => "ThreatLevel",
        }
    }

    /// Human-readable column header.
    pub fn label(self) -> &'static str {
        match self {
            TextColumn::MigrationPattern => "Migration Pattern",
            TextColumn::ThreatLevel => "Threat Level",
            other => other.key(),
        }
    }

    pub fn get(self, record: &Record) -> &str {
        match self {
            TextColumn::Guid => &record.guid,
            TextColumn::Name => &record.name,
            TextColumn::Family => &record.family,
            TextColumn::Location => &record.location,
            TextColumn::Date => &record.date,
            TextColumn::Habitat => &record.habitat,
            TextColumn::MigrationPattern => &record.migration_pattern,
            TextColumn::ThreatLevel => &record.threat_level,
        }
    }

    pub fn get_mut(self, record: &mut Record) -> &mut String {
        match self {
            TextColumn::Guid => &mut record.guid,
            TextColumn::Name => &mut record.name,
            TextColumn::Family => &mut record.family,
            TextColumn::Location => &mut record.location,
            TextColumn::Date => &mut record.date,
            TextColumn::Habitat => &mut record.habitat,
            TextColumn::MigrationPattern => &mut record.migration_pattern,
            TextColumn::ThreatLevel => &mut record.threat_level,
        }
    }
}

impl ColumnRef {
    /// All 14 columns in table order.
    pub fn all() -> [ColumnRef; 14] {
        use NumericColumn as N;
        use TextColumn as T;
        [
            ColumnRef::Text(T::Guid),
            ColumnRef::Text(T::Name),
            ColumnRef::Text(T::Family),
            ColumnRef::Text(T::Location),
            ColumnRef::Text(T::Date),
            ColumnRef::Numeric(N::Wingspan),
            ColumnRef::Numeric(N::Weight),
            ColumnRef::Numeric(N::Price),
            ColumnRef::Numeric(N::Abundance),
            ColumnRef::Numeric(N::ColorRating),
            ColumnRef::Text(T::Habitat),
            ColumnRef::Numeric(N::Lifespan),
            ColumnRef::Text(T::MigrationPattern),
            ColumnRef::Text(T::ThreatLevel),
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            ColumnRef::Numeric(c) => c.key(),
            ColumnRef::Text(c) => c.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColumnRef::Numeric(c) => c.label(),
            ColumnRef::Text(c) => c.label(),
        }
    }
}

impl FromStr for ColumnRef {
    type Err = ColumnError;

    /// Accepts either the field key (`ColorRating`) or the header label (`Color Rating`).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ColumnRef::all()
            .into_iter()
            .find(|c| c.key() == name || c.label() == name)
            .ok_or_else(|| ColumnError::Unknown {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
