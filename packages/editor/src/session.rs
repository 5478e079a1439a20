//! # Edit Session Management
//!
//! Tracks editing state for one user editing one document.
//!
//! An EditSession threads [`EngineState`] snapshots through the public
//! operations so a caller can hold a single mutable handle. Every
//! operation runs to completion and never fails: unknown keys and
//! unreadable text leave a definite, inspectable state behind.
//!
//! ## Phases
//!
//! ```text
//! Empty ──ingest──▶ Loaded ──select──▶ Editing
//!   ▲                 ▲  ▲                  │
//!   │                 │  └──update_fields───┤
//!   └─────────────────┴───────ingest────────┘   (zero operations → Empty)
//! ```
//!
//! The phase describes what the caller did last. The snapshot's selection is
//! independent of it: ingest keeps or picks a selected operation even while
//! the session is `Loaded`.

use crate::{EditableFields, EngineState, FieldPatch, OperationKey, OperationRecord};
use apidocs_document::ParseStatus;
use tracing::warn;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing ingested, or the document has no operations
    Empty,
    /// Operations available
    Loaded,
    /// An operation was selected since the last ingest or update
    Editing,
}

/// Single edit session
#[derive(Debug)]
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    /// Current snapshot (`None` until the first ingest)
    state: Option<EngineState>,

    phase: SessionPhase,

    /// Whether implementation notes are written back
    advanced: bool,

    /// Increments on each successful update
    version: u64,
}

impl EditSession {
    /// Create new edit session
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: None,
            phase: SessionPhase::Empty,
            advanced: false,
            version: 0,
        }
    }

    pub fn with_advanced(mut self, advanced: bool) -> Self {
        self.advanced = advanced;
        self
    }

    pub fn set_advanced(&mut self, advanced: bool) {
        self.advanced = advanced;
    }

    pub fn is_advanced(&self) -> bool {
        self.advanced
    }

    /// (Re)initialize from raw text, carrying over edits for operations that
    /// still exist
    pub fn ingest(&mut self, text: &str) -> &ParseStatus {
        let next = match &self.state {
            Some(state) => state.ingest(text),
            None => EngineState::from_text(text),
        };

        self.phase = if next.has_operations() {
            SessionPhase::Loaded
        } else {
            SessionPhase::Empty
        };

        self.state.insert(next).parse_status()
    }

    /// Operations in listing order
    pub fn list_operations(&self) -> &[OperationRecord] {
        self.state.as_ref().map(EngineState::operations).unwrap_or(&[])
    }

    /// Select an operation; returns false (and keeps the selection) for unknown keys
    pub fn select(&mut self, key: &OperationKey) -> bool {
        match self.state.as_ref().and_then(|state| state.select(key)) {
            Some(next) => {
                self.state = Some(next);
                self.phase = SessionPhase::Editing;
                true
            }
            None => {
                warn!(session = %self.id, key = %key, "Cannot select unknown operation");
                false
            }
        }
    }

    pub fn selected(&self) -> Option<&OperationKey> {
        self.state.as_ref().and_then(EngineState::selected)
    }

    pub fn get_fields(&self, key: &OperationKey) -> Option<&EditableFields> {
        self.state.as_ref().and_then(|state| state.fields(key))
    }

    /// Apply a partial patch to the fields of `key` and return the new text.
    ///
    /// Unknown keys leave the session unchanged and return the current text.
    pub fn update_fields(&mut self, key: &OperationKey, patch: FieldPatch) -> String {
        let next = self
            .state
            .as_ref()
            .and_then(|state| state.update_fields(key, &patch, self.advanced));

        match next {
            Some(next) => {
                self.version += 1;
                self.state = Some(next);
                self.phase = SessionPhase::Loaded;
            }
            None => {
                warn!(session = %self.id, key = %key, "Cannot update unknown operation");
            }
        }

        self.text().to_string()
    }

    /// Current document text (empty before the first ingest)
    pub fn text(&self) -> &str {
        self.state.as_ref().map(EngineState::text).unwrap_or("")
    }

    pub fn parse_status(&self) -> Option<&ParseStatus> {
        self.state.as_ref().map(EngineState::parse_status)
    }

    pub fn state(&self) -> Option<&EngineState> {
        self.state.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Number of successful updates since the session was created
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    const SOURCE: &str = "paths:\n  /a:\n    get:\n      summary: A\n";

    #[test]
    fn test_session_creation() {
        let session = EditSession::new("client-1");

        assert_eq!(session.id, "client-1");
        assert_eq!(session.phase(), SessionPhase::Empty);
        assert_eq!(session.text(), "");
        assert!(session.list_operations().is_empty());
        assert!(session.parse_status().is_none());
    }

    #[test]
    fn test_phase_transitions() {
        let mut session = EditSession::new("client-1");
        let key = OperationKey::new(Method::Get, "/a");

        assert_eq!(session.ingest(SOURCE), &ParseStatus::Parsed);
        assert_eq!(session.phase(), SessionPhase::Loaded);
        assert_eq!(session.list_operations().len(), 1);
        assert_eq!(session.selected(), Some(&key));

        assert!(session.select(&key));
        assert_eq!(session.phase(), SessionPhase::Editing);

        session.update_fields(&key, FieldPatch::default());
        assert_eq!(session.phase(), SessionPhase::Loaded);
        assert_eq!(session.selected(), Some(&key));

        assert!(session.select(&key));
        session.ingest(SOURCE);
        assert_eq!(session.phase(), SessionPhase::Loaded);
    }

    #[test]
    fn test_update_before_ingest_is_a_no_op() {
        let mut session = EditSession::new("client-1");
        let key = OperationKey::new(Method::Get, "/a");

        assert_eq!(session.update_fields(&key, FieldPatch::default()), "");
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn test_unknown_key_keeps_text_and_selection() {
        let mut session = EditSession::new("client-1");
        session.ingest(SOURCE);
        let unknown = OperationKey::new(Method::Post, "/a");

        assert!(!session.select(&unknown));
        assert_eq!(session.update_fields(&unknown, FieldPatch::default()), SOURCE);
        assert_eq!(session.selected(), Some(&OperationKey::new(Method::Get, "/a")));
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn test_reingest_without_operations_returns_to_empty() {
        let mut session = EditSession::new("client-1");
        session.ingest(SOURCE);
        session.ingest("openapi: 3.0.0\n");

        assert_eq!(session.phase(), SessionPhase::Empty);
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_version_counts_updates() {
        let mut session = EditSession::new("client-1");
        session.ingest(SOURCE);
        let key = OperationKey::new(Method::Get, "/a");

        session.update_fields(&key, FieldPatch::default());
        session.update_fields(&key, FieldPatch::default());
        assert_eq!(session.version(), 2);
    }
}
