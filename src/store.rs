//! The record store: sole owner of the loaded [`Collection`].
//!
//! Callers read a snapshot, edit it (usually through [`crate::processing`]) and write the whole
//! collection back with [`RecordStore::set`]. Every `set` bumps the revision and notifies the
//! registered [`StoreObserver`]s so dependent views can refresh.

use std::fmt;
use std::sync::Arc;

use crate::types::Collection;

/// Receives a notification after every [`RecordStore::set`].
pub trait StoreObserver: Send + Sync {
    fn on_refresh(&self, revision: u64, collection: &Collection);
}

#[derive(Default)]
pub struct RecordStore {
    collection: Collection,
    revision: u64,
    observers: Vec<Arc<dyn StoreObserver>>,
}

impl RecordStore {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            revision: 0,
            observers: Vec::new(),
        }
    }

    /// Register a view to refresh after each write.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// The current collection.
    pub fn get(&self) -> &Collection {
        &self.collection
    }

    /// An owned copy of the current collection, for read-edit-write.
    pub fn snapshot(&self) -> Collection {
        self.collection.clone()
    }

    /// Replace the stored collection and refresh observers.
    ///
    /// No validation is performed.
    pub fn set(&mut self, collection: Collection) {
        self.collection = collection;
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            records = self.collection.len(),
            "record store refreshed"
        );
        for o in &self.observers {
            o.on_refresh(self.revision, &self.collection);
        }
    }

    /// Number of writes since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.collection.len())
            .field("revision", &self.revision)
            .field("observers_len", &self.observers.len())
            .finish()
    }
}
