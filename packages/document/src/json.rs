//! Bridge between the document tree and `serde_json`.
//!
//! Used for example payloads, which front ends show and accept as JSON text.

use crate::error::DocumentResult;
use crate::node::{DocumentNode, Mapping, Scalar};
use serde_json::Value;

/// Convert a tree into a JSON value. Non-finite numbers become `null`.
pub fn to_json(node: &DocumentNode) -> Value {
    match node {
        DocumentNode::Scalar(Scalar::Null) => Value::Null,
        DocumentNode::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
        DocumentNode::Scalar(Scalar::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        DocumentNode::Scalar(Scalar::String(s)) => Value::String(s.clone()),
        DocumentNode::Sequence(items) => Value::Array(items.iter().map(to_json).collect()),
        DocumentNode::Mapping(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect(),
        ),
    }
}

/// Convert a JSON value into a tree
pub fn from_json(value: Value) -> DocumentNode {
    match value {
        Value::Null => DocumentNode::null(),
        Value::Bool(b) => DocumentNode::from(b),
        Value::Number(n) => {
            let number = if let Some(i) = n.as_i64() {
                serde_yaml::Number::from(i)
            } else if let Some(u) = n.as_u64() {
                serde_yaml::Number::from(u)
            } else {
                serde_yaml::Number::from(n.as_f64().unwrap_or(f64::NAN))
            };
            DocumentNode::Scalar(Scalar::Number(number))
        }
        Value::String(s) => DocumentNode::string(s),
        Value::Array(items) => items.into_iter().map(from_json).collect(),
        Value::Object(entries) => DocumentNode::mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect::<Mapping>(),
        ),
    }
}

/// Parse strict JSON text into a tree
pub fn parse_json(text: &str) -> DocumentResult<DocumentNode> {
    let value: Value = serde_json::from_str(text)?;
    Ok(from_json(value))
}

/// Pretty-print a tree as JSON with two-space indentation
pub fn to_json_pretty(node: &DocumentNode) -> DocumentResult<String> {
    Ok(serde_json::to_string_pretty(&to_json(node))?)
}
