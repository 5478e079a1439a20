use super::{load_session, require_operation, resolve_input};
use crate::config::Config;
use anyhow::Result;
use apidocs_editor::{EditSession, Method};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// HTTP method of the operation (case-insensitive)
    pub method: Method,

    /// Path template of the operation, e.g. /users/{id}
    pub path: String,

    /// Document to read (defaults to specFile from the config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn show(args: ShowArgs, config: &Config, cwd: &Path) -> Result<()> {
    let path = resolve_input(args.file, config, cwd)?;
    let session = load_session(&path, config.advanced)?;

    println!("{}", render_fields(&session, args.method, &args.path)?);
    Ok(())
}

/// Editable fields of one operation as pretty JSON
pub(crate) fn render_fields(session: &EditSession, method: Method, path: &str) -> Result<String> {
    let key = require_operation(session, method, path)?;
    let fields = session.get_fields(&key);
    Ok(serde_json::to_string_pretty(&fields)?)
}
