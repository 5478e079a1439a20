//! # Editable Fields
//!
//! The projection of one operation that a user may edit, and the partial
//! patches applied to it.
//!
//! Fields are never the source of truth: the document tree is. They are
//! regenerated from the tree on ingest unless reconciliation carries a
//! previous value forward.

use serde::{Deserialize, Serialize};

/// User-editable view of one operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditableFields {
    pub summary: String,
    pub description: String,
    pub response200_description: String,
    /// Raw text of the 200 example: JSON when it parses, plain text otherwise
    pub response200_example: String,
    /// One note per line
    pub notes_text: String,
}

/// Partial update of [`EditableFields`]; absent members are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response200_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response200_example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_text: Option<String>,
}

impl FieldPatch {
    pub fn is_empty(&self) -> bool {
        self == &FieldPatch::default()
    }

    /// Overlay this patch on `fields`
    pub fn apply(&self, fields: &EditableFields) -> EditableFields {
        fn pick(patch: &Option<String>, current: &str) -> String {
            patch.clone().unwrap_or_else(|| current.to_string())
        }

        EditableFields {
            summary: pick(&self.summary, &fields.summary),
            description: pick(&self.description, &fields.description),
            response200_description: pick(
                &self.response200_description,
                &fields.response200_description,
            ),
            response200_example: pick(&self.response200_example, &fields.response200_example),
            notes_text: pick(&self.notes_text, &fields.notes_text),
        }
    }
}
