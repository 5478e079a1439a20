use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported tag {tag}")]
    UnsupportedTag { tag: String },

    #[error("Mapping key must be a scalar")]
    NonScalarKey,

    #[error("Duplicate mapping key {key:?}")]
    DuplicateKey { key: String },
}

impl DocumentError {
    pub fn unsupported_tag(tag: impl Into<String>) -> Self {
        Self::UnsupportedTag { tag: tag.into() }
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }
}
