//! Text → document tree.
//!
//! The grammar is YAML 1.2 via `serde_yaml`, which also accepts JSON input.

use crate::error::{DocumentError, DocumentResult};
use crate::node::{DocumentNode, Mapping, Scalar};
use serde_yaml::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// How a call to [`parse`] went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatus {
    /// The text held a document
    Parsed,
    /// The text was blank, comment-only or an explicit `null`
    Empty,
    /// The text could not be read; the tree was replaced by an empty mapping
    Malformed { message: String },
}

impl ParseStatus {
    pub fn is_malformed(&self) -> bool {
        matches!(self, ParseStatus::Malformed { .. })
    }
}

/// Outcome of a lenient parse
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub tree: DocumentNode,
    pub status: ParseStatus,
}

/// Parse text, degrading to an empty mapping instead of failing
pub fn parse(text: &str) -> Parsed {
    match try_parse(text) {
        Ok(tree) if tree.is_null() => Parsed {
            tree: DocumentNode::empty_mapping(),
            status: ParseStatus::Empty,
        },
        Ok(tree) => Parsed {
            tree,
            status: ParseStatus::Parsed,
        },
        Err(err) => {
            warn!(error = %err, "Document is malformed, continuing with an empty document");
            Parsed {
                tree: DocumentNode::empty_mapping(),
                status: ParseStatus::Malformed {
                    message: err.to_string(),
                },
            }
        }
    }
}

/// Parse text, reporting why it could not be read
pub fn try_parse(text: &str) -> DocumentResult<DocumentNode> {
    if is_blank(text) {
        return Ok(DocumentNode::null());
    }

    let mut value: Value = serde_yaml::from_str(text)?;
    value.apply_merge()?;
    let tree = from_yaml(value)?;
    debug!(bytes = text.len(), "Parsed document");
    Ok(tree)
}

fn is_blank(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#'))
}

/// Convert a `serde_yaml` value into a document tree
pub fn from_yaml(value: Value) -> DocumentResult<DocumentNode> {
    let node = match value {
        Value::Null => DocumentNode::Scalar(Scalar::Null),
        Value::Bool(b) => DocumentNode::Scalar(Scalar::Bool(b)),
        Value::Number(n) => DocumentNode::Scalar(Scalar::Number(n)),
        Value::String(s) => DocumentNode::Scalar(Scalar::String(s)),
        Value::Sequence(items) => {
            let items = items
                .into_iter()
                .map(from_yaml)
                .collect::<DocumentResult<Vec<_>>>()?;
            DocumentNode::Sequence(Arc::new(items))
        }
        Value::Mapping(entries) => {
            let mut map = Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                let key = mapping_key(key)?;
                if map.contains_key(&key) {
                    return Err(DocumentError::duplicate_key(key));
                }
                map.insert(key, from_yaml(value)?);
            }
            DocumentNode::Mapping(Arc::new(map))
        }
        Value::Tagged(tagged) => return Err(DocumentError::unsupported_tag(tagged.tag.to_string())),
    };

    Ok(node)
}

/// Scalar keys are addressed by their text (`200:` and `"200":` are the same key)
fn mapping_key(key: Value) -> DocumentResult<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(Scalar::Number(n).to_text()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Sequence(_) | Value::Mapping(_) => Err(DocumentError::NonScalarKey),
        Value::Tagged(tagged) => Err(DocumentError::unsupported_tag(tagged.tag.to_string())),
    }
}
