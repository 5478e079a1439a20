//! # apidocs Editor
//!
//! Field synchronization engine behind "edit the documentation before
//! rendering it".
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: text ⇄ DocumentNode               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: operations + editable fields        │
//! │  - Index operations (paths × methods)       │
//! │  - Reconcile fields across re-parses        │
//! │  - Merge field edits back into the tree     │
//! │  - Track selection per session              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ caller: persist text, render PDF            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Tree is source of truth**: fields are a projection of it
//! 2. **Selective mutation**: only the addressed leaves change; everything
//!    the engine does not understand is preserved
//! 3. **Immutable snapshots**: every operation yields a new [`EngineState`]
//! 4. **Never fails**: bad input degrades to definite, inspectable states
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apidocs_editor::{EditSession, FieldPatch, OperationKey};
//!
//! let mut session = EditSession::new("upload-42").with_advanced(true);
//! session.ingest(&yaml_from_backend);
//!
//! let key: OperationKey = "GET /users/{id}".parse()?;
//! let text = session.update_fields(&key, FieldPatch {
//!     summary: Some("Fetch a user by id".to_string()),
//!     ..Default::default()
//! });
//! // hand `text` to the PDF renderer
//! ```

mod errors;
mod fields;
mod indexer;
mod key;
mod merge;
mod session;
mod state;
mod store;

pub use errors::EditorError;
pub use fields::{EditableFields, FieldPatch};
pub use indexer::{
    index_operations, project_fields, IndexedOperation, OperationRecord, EDITABLE_RESPONSE,
    NOTES_EXTENSION,
};
pub use key::{Method, OperationKey};
pub use merge::{merge_fields, DEFAULT_CONTENT_TYPE};
pub use session::{EditSession, SessionPhase};
pub use state::EngineState;
pub use store::FieldStore;

// Re-export document types for convenience
pub use apidocs_document::{DocumentNode, ParseStatus};
