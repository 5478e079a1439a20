//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),

    #[error("Invalid operation key {0:?}: expected \"METHOD /path\"")]
    InvalidKey(String),
}
