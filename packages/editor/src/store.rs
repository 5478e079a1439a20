//! # Field Store
//!
//! Current field values per operation, reconciled across re-parses.
//!
//! ## Reconciliation
//!
//! When a new version of the document arrives:
//! - keys present before and after keep their previous (possibly edited) fields
//! - new keys take the freshly parsed fields
//! - keys that disappeared are dropped
//!
//! A re-parse triggered by something unrelated therefore never discards
//! in-flight edits.

use crate::{EditableFields, IndexedOperation, OperationKey};
use indexmap::IndexMap;
use tracing::debug;

/// Editable fields keyed by operation, in listing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStore {
    entries: IndexMap<OperationKey, EditableFields>,
}

impl FieldStore {
    /// Seed a store from freshly indexed operations
    pub fn seed(operations: &[IndexedOperation]) -> Self {
        Self {
            entries: operations
                .iter()
                .map(|op| (op.record.key.clone(), op.fields.clone()))
                .collect(),
        }
    }

    /// Build the store for a new set of operations, carrying over the fields
    /// of every key this store already holds
    pub fn reconcile(&self, operations: &[IndexedOperation]) -> Self {
        let entries = operations
            .iter()
            .map(|op| {
                let fields = match self.entries.get(&op.record.key) {
                    Some(previous) => previous.clone(),
                    None => op.fields.clone(),
                };
                (op.record.key.clone(), fields)
            })
            .collect::<IndexMap<_, _>>();

        let carried = entries.keys().filter(|key| self.entries.contains_key(*key)).count();
        let dropped = self.entries.keys().filter(|key| !entries.contains_key(*key)).count();

        debug!(
            carried,
            fresh = entries.len() - carried,
            dropped,
            "Reconciled field store"
        );

        Self { entries }
    }

    pub fn get(&self, key: &OperationKey) -> Option<&EditableFields> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &OperationKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Copy of this store with `key` set to `fields`
    pub fn with_fields(&self, key: &OperationKey, fields: EditableFields) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.clone(), fields);
        Self { entries }
    }

    pub fn keys(&self) -> impl Iterator<Item = &OperationKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
