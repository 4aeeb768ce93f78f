//! Core data model types.
//!
//! A catalog is an ordered [`Collection`] of [`Record`]s. Sources carry four of the numeric
//! fields as decimal strings ([`RawRecord`]); loading converts them into numbers.

use serde::{Deserialize, Serialize};

use crate::parse::parse_float;

/// One butterfly catalog entry.
///
/// Numeric fields are `None` for an empty (newly inserted) row. A value that could not be parsed
/// from the source is stored as `Some(f64::NAN)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    #[serde(rename = "GUID")]
    pub guid: String,
    pub name: String,
    pub family: String,
    pub location: String,
    pub date: String,
    pub wingspan: Option<f64>,
    pub weight: Option<f64>,
    pub price: Option<f64>,
    pub abundance: Option<f64>,
    pub color_rating: Option<f64>,
    pub habitat: String,
    pub lifespan: Option<f64>,
    pub migration_pattern: String,
    pub threat_level: String,
}

impl Record {
    /// A blank row: every text field `""`, every numeric field `None`.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A catalog entry as it appears in the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    #[serde(rename = "GUID")]
    pub guid: String,
    pub name: String,
    pub family: String,
    pub location: String,
    pub date: String,
    pub wingspan: String,
    pub weight: String,
    pub price: String,
    pub abundance: Option<f64>,
    pub color_rating: Option<f64>,
    pub habitat: String,
    pub lifespan: String,
    pub migration_pattern: String,
    pub threat_level: String,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Self {
            wingspan: Some(parse_float(&raw.wingspan)),
            weight: Some(parse_float(&raw.weight)),
            price: Some(parse_float(&raw.price)),
            lifespan: Some(parse_float(&raw.lifespan)),
            abundance: raw.abundance,
            color_rating: raw.color_rating,
            guid: raw.guid,
            name: raw.name,
            family: raw.family,
            location: raw.location,
            date: raw.date,
            habitat: raw.habitat,
            migration_pattern: raw.migration_pattern,
            threat_level: raw.threat_level,
        }
    }
}

impl From<&Record> for RawRecord {
    fn from(record: &Record) -> Self {
        Self {
            guid: record.guid.clone(),
            name: record.name.clone(),
            family: record.family.clone(),
            location: record.location.clone(),
            date: record.date.clone(),
            wingspan: format_decimal(record.wingspan),
            weight: format_decimal(record.weight),
            price: format_decimal(record.price),
            abundance: record.abundance,
            color_rating: record.color_rating,
            habitat: record.habitat.clone(),
            lifespan: format_decimal(record.lifespan),
            migration_pattern: record.migration_pattern.clone(),
            threat_level: record.threat_level.clone(),
        }
    }
}

/// Render a numeric field the way the source document stores it.
///
/// Uses the shortest representation that parses back to the same `f64`; `None` becomes `""`.
pub fn format_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) if v == f64::INFINITY => "Infinity".to_string(),
        Some(v) if v == f64::NEG_INFINITY => "-Infinity".to_string(),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// The source document: `{"butterflies": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub butterflies: Vec<RawRecord>,
}

/// Ordered, in-memory catalog.
///
/// Order is significant (it is the table's row order). Nothing is unique, not even `GUID`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Create a new collection containing only records that match `predicate`, in order.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        Self { records }
    }

    /// Create a new collection by applying `edit` to a copy of every record.
    pub fn map_records<F>(&self, mut edit: F) -> Self
    where
        F: FnMut(&mut Record),
    {
        let records = self
            .records
            .iter()
            .map(|r| {
                let mut out = r.clone();
                edit(&mut out);
                out
            })
            .collect();
        Self { records }
    }

    /// Convert a source document into a collection.
    pub fn from_document(doc: CatalogDocument) -> Self {
        Self::new(doc.butterflies.into_iter().map(Record::from).collect())
    }

    /// Convert back into the source document shape.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            butterflies: self.records.iter().map(RawRecord::from).collect(),
        }
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Collection, RawRecord, Record};

    fn raw(name: &str, wingspan: &str) -> RawRecord {
        RawRecord {
            guid: format!("guid-{name}"),
            name: name.to_string(),
            wingspan: wingspan.to_string(),
            weight: "0.5".to_string(),
            price: "12.99".to_string(),
            lifespan: "14".to_string(),
            abundance: Some(300.0),
            color_rating: Some(8.0),
            ..Default::default()
        }
    }

    #[test]
    fn raw_record_converts_string_numbers() {
        let r = Record::from(raw("Monarch", "9.5"));
        assert_eq!(r.wingspan, Some(9.5));
        assert_eq!(r.weight, Some(0.5));
        assert_eq!(r.price, Some(12.99));
        assert_eq!(r.lifespan, Some(14.0));
        assert_eq!(r.abundance, Some(300.0));
        assert_eq!(r.color_rating, Some(8.0));
        assert_eq!(r.name, "Monarch");
    }

    #[test]
    fn unparseable_numeric_string_becomes_nan() {
        let r = Record::from(raw("Monarch", "wide"));
        assert!(r.wingspan.is_some_and(f64::is_nan));
    }

    #[test]
    fn record_serializes_with_source_field_names() {
        let v = serde_json::to_value(Record::empty()).unwrap();
        let obj = v.as_object().unwrap();
        for key in [
            "GUID",
            "Name",
            "ColorRating",
            "MigrationPattern",
            "ThreatLevel",
            "Abundance",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj["Wingspan"], serde_json::Value::Null);
        assert_eq!(obj["Name"], serde_json::Value::String(String::new()));
    }

    #[test]
    fn document_round_trip_preserves_values() {
        let original = Collection::new(vec![
            Record::from(raw("Monarch", "9.5")),
            Record::from(raw("Swallowtail", "11.25")),
        ]);
        let back = Collection::from_document(original.to_document());
        assert_eq!(back, original);
    }

    #[test]
    fn empty_numeric_fields_are_written_as_empty_strings() {
        let doc = Collection::new(vec![Record::empty()]).to_document();
        assert_eq!(doc.butterflies[0].wingspan, "");
        assert_eq!(doc.butterflies[0].abundance, None);
    }

    #[test]
    fn filter_and_map_leave_source_untouched() {
        let c = Collection::new(vec![
            Record::from(raw("Monarch", "9.5")),
            Record::from(raw("Swallowtail", "11.25")),
        ]);

        let only = c.filter_records(|r| r.name == "Swallowtail");
        assert_eq!(only.len(), 1);
        assert_eq!(only.records()[0].name, "Swallowtail");

        let renamed = c.map_records(|r| r.name.push('!'));
        assert_eq!(renamed.records()[0].name, "Monarch!");
        assert_eq!(c.records()[0].name, "Monarch");
    }
}
