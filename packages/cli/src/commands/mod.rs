pub mod detect;
pub mod edit;
pub mod list;
pub mod show;

pub use detect::{detect, DetectArgs};
pub use edit::{edit, EditArgs};
pub use list::{list, ListArgs};
pub use show::{show, ShowArgs};

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use apidocs_editor::{EditSession, Method, OperationKey};
use std::fs;
use std::path::{Path, PathBuf};

/// Explicit file, else the configured one
pub(crate) fn resolve_input(file: Option<PathBuf>, config: &Config, cwd: &Path) -> Result<PathBuf> {
    file.map(|file| cwd.join(file))
        .or_else(|| config.spec_path(cwd))
        .ok_or_else(|| {
            anyhow!(
                "No document given and no specFile configured (run `apidocs detect` to find one)"
            )
        })
}

/// Read `path` into a fresh session
pub(crate) fn load_session(path: &Path, advanced: bool) -> Result<EditSession> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut session = EditSession::new(path.display().to_string()).with_advanced(advanced);
    session.ingest(&text);
    Ok(session)
}

/// Look up `method path` in the session, failing with the known operations listed
pub(crate) fn require_operation(session: &EditSession, method: Method, path: &str) -> Result<OperationKey> {
    let key = OperationKey::new(method, path);
    if session.get_fields(&key).is_some() {
        return Ok(key);
    }

    let known: Vec<String> = session
        .list_operations()
        .iter()
        .map(|op| op.key.to_string())
        .collect();

    if known.is_empty() {
        Err(anyhow!("Unknown operation {}: the document has no operations", key))
    } else {
        Err(anyhow!("Unknown operation {}; known operations:\n  {}", key, known.join("\n  ")))
    }
}
