//! Row-level edits: insert, duplicate, delete.

use crate::error::PreconditionError;
use crate::types::{Collection, Record};

/// Returns a copy of `collection` with one empty [`Record`] appended.
///
/// The new row is always the last one.
pub fn insert_empty_row(collection: &Collection) -> Collection {
    let mut out = collection.clone();
    out.records_mut().push(Record::empty());
    out
}

/// Returns a copy of `collection` where the selected row is duplicated right after itself.
///
/// `selection` must contain exactly one index.
pub fn duplicate_row(collection: &Collection, selection: &[usize]) -> Result<Collection, PreconditionError> {
    let &[index] = selection else {
        return Err(PreconditionError::DuplicateSelection {
            selected: selection.len(),
        });
    };

    let source = collection
        .get(index)
        .cloned()
        .ok_or(PreconditionError::IndexOutOfRange {
            index,
            len: collection.len(),
        })?;

    let mut out = collection.clone();
    out.records_mut().insert(index + 1, source);
    Ok(out)
}

/// Returns a copy of `collection` without the selected rows.
///
/// Repeated indices count once. Every index is validated before anything is removed, then rows
/// are removed from the highest index down so pending indices never shift.
pub fn delete_rows(collection: &Collection, selection: &[usize]) -> Result<Collection, PreconditionError> {
    if selection.is_empty() {
        return Err(PreconditionError::EmptySelection);
    }

    let len = collection.len();
    if let Some(&index) = selection.iter().find(|&&i| i >= len) {
        return Err(PreconditionError::IndexOutOfRange { index, len });
    }

    let mut indices = selection.to_vec();
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();

    let mut out = collection.clone();
    let records = out.records_mut();
    for i in indices {
        records.remove(i);
    }
    Ok(out)
}
