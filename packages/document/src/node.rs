//! # Document Tree
//!
//! Generic tagged tree for a parsed specification document.
//!
//! Sequences and mappings hold their children behind an `Arc`, so cloning a
//! node is cheap and two trees can share every subtree neither of them has
//! edited. Mutation goes through the `*_mut` accessors, which copy a shared
//! container before handing out a mutable reference:
//!
//! ```text
//! before                     after editing paths./a.get.summary
//!
//! root ─ paths ─ /a ─ get    root' ─ paths' ─ /a' ─ get'   (copied)
//!              └ /b ─ ...                   └ /b ─ ...     (shared)
//! ```

use indexmap::IndexMap;
use serde_yaml::Number;
use std::sync::Arc;

/// Ordered key → node mapping
pub type Mapping = IndexMap<String, DocumentNode>;

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    Scalar(Scalar),
    Sequence(Arc<Vec<DocumentNode>>),
    Mapping(Arc<Mapping>),
}

/// Leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Plain-text rendering, the way a JavaScript front end would print it
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Null => "null".to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => number_text(n),
            Scalar::String(s) => s.clone(),
        }
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }

    match n.as_f64() {
        Some(f) if f.is_nan() => "NaN".to_string(),
        Some(f) if f.is_infinite() && f > 0.0 => "Infinity".to_string(),
        Some(f) if f.is_infinite() => "-Infinity".to_string(),
        // Integral floats print without a fractional part (1.0 → "1")
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) => exponent_text(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// `1e21` → "1e+21", `1.5e-7` → "1.5e-7"
fn exponent_text(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

impl DocumentNode {
    pub fn null() -> Self {
        DocumentNode::Scalar(Scalar::Null)
    }

    pub fn empty_mapping() -> Self {
        DocumentNode::Mapping(Arc::new(Mapping::new()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        DocumentNode::Scalar(Scalar::String(value.into()))
    }

    pub fn sequence(items: Vec<DocumentNode>) -> Self {
        DocumentNode::Sequence(Arc::new(items))
    }

    pub fn mapping(entries: Mapping) -> Self {
        DocumentNode::Mapping(Arc::new(entries))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            DocumentNode::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DocumentNode]> {
        match self {
            DocumentNode::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            DocumentNode::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, DocumentNode::Mapping(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DocumentNode::Scalar(Scalar::Null))
    }

    /// Look up a key; `None` when absent or when this node is not a mapping
    pub fn get(&self, key: &str) -> Option<&DocumentNode> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Follow a chain of mapping keys
    pub fn get_path(&self, keys: &[&str]) -> Option<&DocumentNode> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    /// True when both nodes are containers backed by the same allocation
    pub fn ptr_eq(&self, other: &DocumentNode) -> bool {
        match (self, other) {
            (DocumentNode::Sequence(a), DocumentNode::Sequence(b)) => Arc::ptr_eq(a, b),
            (DocumentNode::Mapping(a), DocumentNode::Mapping(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Mutable access to this node as a mapping.
    ///
    /// A non-mapping node is replaced by an empty mapping first. A mapping
    /// shared with another tree is copied (one level deep) before it is
    /// handed out.
    pub fn make_mapping_mut(&mut self) -> &mut Mapping {
        if !self.is_mapping() {
            *self = DocumentNode::empty_mapping();
        }

        match self {
            DocumentNode::Mapping(map) => Arc::make_mut(map),
            _ => unreachable!("node was just replaced by a mapping"),
        }
    }

    /// Mutable access to the mapping stored under `key`, creating it if needed
    pub fn child_mapping_mut(&mut self, key: &str) -> &mut DocumentNode {
        let map = self.make_mapping_mut();
        let child = map
            .entry(key.to_string())
            .or_insert_with(DocumentNode::empty_mapping);
        child.make_mapping_mut();
        child
    }

    /// Set `key` to `value`, keeping the key's position if it already exists
    pub fn set(&mut self, key: &str, value: DocumentNode) {
        self.make_mapping_mut().insert(key.to_string(), value);
    }

    /// Remove `key` while keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<DocumentNode> {
        match self {
            DocumentNode::Mapping(map) if map.contains_key(key) => {
                Arc::make_mut(map).shift_remove(key)
            }
            _ => None,
        }
    }
}

impl Default for DocumentNode {
    fn default() -> Self {
        DocumentNode::empty_mapping()
    }
}

impl From<&str> for DocumentNode {
    fn from(value: &str) -> Self {
        DocumentNode::string(value)
    }
}

impl From<String> for DocumentNode {
    fn from(value: String) -> Self {
        DocumentNode::string(value)
    }
}

impl From<bool> for DocumentNode {
    fn from(value: bool) -> Self {
        DocumentNode::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for DocumentNode {
    fn from(value: i64) -> Self {
        DocumentNode::Scalar(Scalar::Number(Number::from(value)))
    }
}

impl FromIterator<(String, DocumentNode)> for DocumentNode {
    fn from_iter<I: IntoIterator<Item = (String, DocumentNode)>>(iter: I) -> Self {
        DocumentNode::mapping(iter.into_iter().collect())
    }
}

impl FromIterator<DocumentNode> for DocumentNode {
    fn from_iter<I: IntoIterator<Item = DocumentNode>>(iter: I) -> Self {
        DocumentNode::sequence(iter.into_iter().collect())
    }
}
