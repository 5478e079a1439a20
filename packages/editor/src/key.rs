//! Operation addressing: `(method, path)` pairs and their `"METHOD path"` form

use crate::EditorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP methods that can carry an operation, in canonical listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    /// Canonical order used when enumerating a path item
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Head,
        Method::Options,
    ];

    /// Key of this method inside a path item (lower case)
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Patch => "patch",
            Method::Head => "head",
            Method::Options => "options",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for Method {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EditorError::UnknownMethod(s.to_string()))
    }
}

/// Identifies one operation of the document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperationKey {
    pub method: Method,
    pub path: String,
}

impl OperationKey {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

impl FromStr for OperationKey {
    type Err = EditorError;

    /// Parses `"GET /users/{id}"`; everything after the first space is the path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (method, path) = s
            .split_once(' ')
            .ok_or_else(|| EditorError::InvalidKey(s.to_string()))?;

        if path.is_empty() {
            return Err(EditorError::InvalidKey(s.to_string()));
        }

        Ok(Self::new(method.parse()?, path))
    }
}

impl TryFrom<String> for OperationKey {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OperationKey> for String {
    fn from(key: OperationKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_form() {
        let key = OperationKey::new(Method::Get, "/users/{id}");
        assert_eq!(key.to_string(), "GET /users/{id}");
    }

    #[test]
    fn test_parse_display_form() {
        let key: OperationKey = "delete /users/{id}".parse().unwrap();
        assert_eq!(key, OperationKey::new(Method::Delete, "/users/{id}"));

        let spaced: OperationKey = "GET /search with spaces".parse().unwrap();
        assert_eq!(spaced.path, "/search with spaces");
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        assert_eq!(
            "FETCH /users".parse::<OperationKey>(),
            Err(EditorError::UnknownMethod("FETCH".to_string()))
        );
        assert!(matches!(
            "GET".parse::<OperationKey>(),
            Err(EditorError::InvalidKey(_))
        ));
        assert!(matches!(
            "GET ".parse::<OperationKey>(),
            Err(EditorError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_key_serializes_as_display_string() {
        let key = OperationKey::new(Method::Patch, "/orders/{id}");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"PATCH /orders/{id}\"");

        let back: OperationKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_canonical_order() {
        let names: Vec<_> = Method::ALL.iter().map(Method::as_str).collect();
        assert_eq!(names, vec!["get", "post", "put", "delete", "patch", "head", "options"]);
    }
}
