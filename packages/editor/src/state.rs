//! # Engine State
//!
//! One immutable snapshot of an editing session. Every transition is a pure
//! function from a state (plus input) to a new state; the previous state,
//! including its tree, stays valid and unchanged.
//!
//! ```text
//! ingest(text) ──▶ parse ──▶ index ──▶ reconcile fields ──▶ EngineState
//!                                                             │
//! update_fields(key, patch) ──▶ patch fields ──▶ merge ──▶ serialize
//! ```

use crate::merge::merge_fields;
use crate::{index_operations, EditableFields, FieldPatch, FieldStore, OperationKey, OperationRecord};
use apidocs_document::{parse, serialize, DocumentNode, ParseStatus};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    tree: DocumentNode,
    text: String,
    status: ParseStatus,
    operations: Vec<OperationRecord>,
    fields: FieldStore,
    selected: Option<OperationKey>,
}

impl EngineState {
    /// Build the first state from raw text
    pub fn from_text(text: &str) -> Self {
        Self::build(None, text)
    }

    /// Build the state for a new version of the text, reconciling fields and
    /// selection with this one
    pub fn ingest(&self, text: &str) -> Self {
        Self::build(Some(self), text)
    }

    #[instrument(skip_all, fields(bytes = text.len(), reingest = previous.is_some()))]
    fn build(previous: Option<&EngineState>, text: &str) -> Self {
        let parsed = parse(text);
        let indexed = index_operations(&parsed.tree);

        let fields = match previous {
            Some(previous) => previous.fields.reconcile(&indexed),
            None => FieldStore::seed(&indexed),
        };
        let operations: Vec<OperationRecord> = indexed.into_iter().map(|op| op.record).collect();
        let selected = reconcile_selection(previous.and_then(|p| p.selected.as_ref()), &operations);

        info!(
            operations = operations.len(),
            status = ?parsed.status,
            selected = ?selected,
            "Ingested document"
        );

        Self {
            tree: parsed.tree,
            text: text.to_string(),
            status: parsed.status,
            operations,
            fields,
            selected,
        }
    }

    /// State with `key` selected, or `None` when the document has no such operation
    pub fn select(&self, key: &OperationKey) -> Option<Self> {
        if !self.fields.contains(key) {
            return None;
        }

        Some(Self {
            selected: Some(key.clone()),
            ..self.clone()
        })
    }

    /// State with `patch` applied to the fields of `key` and merged into the
    /// tree, or `None` when the document has no such operation.
    ///
    /// Costs a path copy of the tree plus a full re-serialization.
    #[instrument(skip(self, key, patch), fields(key = %key))]
    pub fn update_fields(&self, key: &OperationKey, patch: &FieldPatch, advanced: bool) -> Option<Self> {
        let current = self.fields.get(key)?;
        let updated = patch.apply(current);

        let tree = merge_fields(&self.tree, key, &updated, advanced);
        let text = serialize(&tree);
        let operations = index_operations(&tree)
            .into_iter()
            .map(|op| op.record)
            .collect();

        debug!(bytes = text.len(), "Re-serialized document");

        Some(Self {
            tree,
            text,
            status: self.status.clone(),
            operations,
            fields: self.fields.with_fields(key, updated),
            selected: self.selected.clone(),
        })
    }

    pub fn tree(&self) -> &DocumentNode {
        &self.tree
    }

    /// Text of the current document: the ingested text, or the serialized
    /// tree after an update
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parse_status(&self) -> &ParseStatus {
        &self.status
    }

    pub fn operations(&self) -> &[OperationRecord] {
        &self.operations
    }

    pub fn fields(&self, key: &OperationKey) -> Option<&EditableFields> {
        self.fields.get(key)
    }

    pub fn selected(&self) -> Option<&OperationKey> {
        self.selected.as_ref()
    }

    pub fn selected_fields(&self) -> Option<&EditableFields> {
        self.selected.as_ref().and_then(|key| self.fields.get(key))
    }

    pub fn has_operations(&self) -> bool {
        !self.operations.is_empty()
    }
}

/// Keep the previous selection if it still exists, otherwise the first operation
fn reconcile_selection(
    previous: Option<&OperationKey>,
    operations: &[OperationRecord],
) -> Option<OperationKey> {
    previous
        .filter(|key| operations.iter().any(|op| &op.key == *key))
        .cloned()
        .or_else(|| operations.first().map(|op| op.key.clone()))
}
