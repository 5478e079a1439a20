use super::{load_session, require_operation, resolve_input};
use crate::config::Config;
use anyhow::{Context, Result};
use apidocs_editor::{EditSession, FieldPatch, Method};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct EditArgs {
    /// HTTP method of the operation (case-insensitive)
    pub method: Method,

    /// Path template of the operation, e.g. /users/{id}
    pub path: String,

    /// Document to edit (defaults to specFile from the config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// New summary (empty string removes it)
    #[arg(long)]
    pub summary: Option<String>,

    /// New description (empty string removes it)
    #[arg(long)]
    pub description: Option<String>,

    /// New description of the 200 response
    #[arg(long)]
    pub response_description: Option<String>,

    /// New 200 example: JSON when it parses, plain text otherwise
    #[arg(long)]
    pub example: Option<String>,

    /// Implementation notes, one per line (written only in advanced mode)
    #[arg(long)]
    pub notes: Option<String>,

    /// Field patch as JSON, e.g. '{"summary": "..."}'; individual flags win
    #[arg(long)]
    pub patch: Option<String>,

    /// Write implementation notes back
    #[arg(long)]
    pub advanced: bool,

    /// Write the result to this file instead of stdout
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input document
    #[arg(long)]
    pub in_place: bool,
}

impl EditArgs {
    /// Combine `--patch` with the individual field flags
    pub fn field_patch(&self) -> Result<FieldPatch> {
        let mut patch = match &self.patch {
            Some(json) => serde_json::from_str::<FieldPatch>(json).context("Invalid --patch JSON")?,
            None => FieldPatch::default(),
        };

        let overrides = [
            (&self.summary, &mut patch.summary),
            (&self.description, &mut patch.description),
            (&self.response_description, &mut patch.response200_description),
            (&self.example, &mut patch.response200_example),
            (&self.notes, &mut patch.notes_text),
        ];
        for (flag, field) in overrides {
            if flag.is_some() {
                *field = flag.clone();
            }
        }

        Ok(patch)
    }
}

pub fn edit(args: EditArgs, config: &Config, cwd: &Path) -> Result<()> {
    let patch = args.field_patch()?;
    let advanced = args.advanced || config.advanced;

    let input = resolve_input(args.file.clone(), config, cwd)?;
    let mut session = load_session(&input, advanced)?;

    if patch.notes_text.is_some() && !advanced {
        eprintln!(
            "{} Notes are only written in advanced mode (pass --advanced)",
            "⚠️".yellow()
        );
    }

    let text = apply_edit(&mut session, args.method, &args.path, patch)?;

    let target = match (&args.output, args.in_place) {
        (Some(output), _) => Some(cwd.join(output)),
        (None, true) => Some(input),
        (None, false) => None,
    };

    match target {
        Some(target) => {
            fs::write(&target, &text)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            eprintln!(
                "{} Updated {} {} → {}",
                "✓".green(),
                args.method,
                args.path,
                target.display()
            );
        }
        None => print!("{}", text),
    }

    Ok(())
}

/// Apply `patch` to one operation and return the new document text
pub(crate) fn apply_edit(
    session: &mut EditSession,
    method: Method,
    path: &str,
    patch: FieldPatch,
) -> Result<String> {
    let key = require_operation(session, method, path)?;
    session.select(&key);
    Ok(session.update_fields(&key, patch))
}
