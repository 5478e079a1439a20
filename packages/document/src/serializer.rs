//! Document tree → YAML text.
//!
//! Output is one document, keys in tree order, every node written out in
//! full (no anchors or aliases). Emitter settings are fixed, so the same
//! tree always produces the same lines and an edit to one field only
//! changes the lines that hold it.

use crate::error::DocumentResult;
use crate::node::{DocumentNode, Scalar};
use serde_yaml::Value;
use tracing::error;

/// Serialize a tree to YAML text
pub fn serialize(tree: &DocumentNode) -> String {
    match try_serialize(tree) {
        Ok(text) => text,
        Err(err) => {
            // serde_yaml only fails here on writer errors, which a String never raises
            error!(error = %err, "Failed to serialize document");
            String::new()
        }
    }
}

pub fn try_serialize(tree: &DocumentNode) -> DocumentResult<String> {
    Ok(serde_yaml::to_string(&to_yaml(tree))?)
}

/// Convert a document tree into a `serde_yaml` value
pub fn to_yaml(node: &DocumentNode) -> Value {
    match node {
        DocumentNode::Scalar(Scalar::Null) => Value::Null,
        DocumentNode::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
        DocumentNode::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
        DocumentNode::Scalar(Scalar::String(s)) => Value::String(s.clone()),
        DocumentNode::Sequence(items) => Value::Sequence(items.iter().map(to_yaml).collect()),
        DocumentNode::Mapping(map) => Value::Mapping(
            map.iter()
                .map(|(key, value)| (Value::String(key.clone()), to_yaml(value)))
                .collect(),
        ),
    }
}
