//! # Operation Indexer
//!
//! Enumerates the operations of a document and projects each one onto its
//! [`EditableFields`].
//!
//! Order is a contract: paths in document order, and within a path the
//! methods in [`Method::ALL`] order.

use crate::{EditableFields, Method, OperationKey};
use apidocs_document::{to_json, to_json_pretty, DocumentNode};
use serde::Serialize;
use tracing::{debug, warn};

/// Vendor extension holding implementation notes
pub const NOTES_EXTENSION: &str = "x-impl-notes";

/// Response code whose description and example are editable
pub const EDITABLE_RESPONSE: &str = "200";

/// Read-only summary of an operation, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationRecord {
    pub key: OperationKey,
    pub method: Method,
    pub path: String,
    pub summary: String,
    pub description: String,
}

/// An operation together with the fields parsed from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedOperation {
    pub record: OperationRecord,
    pub fields: EditableFields,
}

/// Enumerate every operation under the top-level `paths` mapping
pub fn index_operations(tree: &DocumentNode) -> Vec<IndexedOperation> {
    let Some(paths) = tree.get("paths").and_then(DocumentNode::as_mapping) else {
        debug!("Document has no paths mapping");
        return Vec::new();
    };

    let mut operations = Vec::new();

    for (path, item) in paths {
        if !item.is_mapping() {
            continue;
        }

        for method in Method::ALL {
            let Some(operation) = item.get(method.as_str()).filter(|op| op.is_mapping()) else {
                continue;
            };

            let fields = project_fields(operation);
            let record = OperationRecord {
                key: OperationKey::new(method, path.clone()),
                method,
                path: path.clone(),
                summary: fields.summary.clone(),
                description: fields.description.clone(),
            };

            operations.push(IndexedOperation { record, fields });
        }
    }

    debug!(operations = operations.len(), "Indexed operations");
    operations
}

/// Project one operation object onto its editable fields
pub fn project_fields(operation: &DocumentNode) -> EditableFields {
    let response = operation.get_path(&["responses", EDITABLE_RESPONSE]);

    EditableFields {
        summary: text_of(operation.get("summary")),
        description: text_of(operation.get("description")),
        response200_description: text_of(response.and_then(|r| r.get("description"))),
        response200_example: response.map(example_text).unwrap_or_default(),
        notes_text: notes_text(operation),
    }
}

/// Scalar as text; absent, null or structured values read as empty
fn text_of(node: Option<&DocumentNode>) -> String {
    match node {
        Some(node) if node.is_null() => String::new(),
        Some(DocumentNode::Scalar(scalar)) => scalar.to_text(),
        _ => String::new(),
    }
}

/// Example of the first content type, as text
fn example_text(response: &DocumentNode) -> String {
    let Some(media) = response
        .get("content")
        .and_then(DocumentNode::as_mapping)
        .and_then(|content| content.values().next())
    else {
        return String::new();
    };

    match media.get("example") {
        None => String::new(),
        Some(example) if example.is_null() => String::new(),
        Some(DocumentNode::Scalar(scalar)) => scalar.to_text(),
        Some(example) => to_json_pretty(example).unwrap_or_else(|err| {
            warn!(error = %err, "Could not render example as JSON");
            String::new()
        }),
    }
}

fn notes_text(operation: &DocumentNode) -> String {
    let Some(notes) = operation.get(NOTES_EXTENSION).and_then(DocumentNode::as_sequence) else {
        return String::new();
    };

    notes
        .iter()
        .map(|note| match note {
            DocumentNode::Scalar(scalar) => scalar.to_text(),
            other => to_json(other).to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
