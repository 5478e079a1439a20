use super::{load_session, resolve_input};
use crate::config::Config;
use anyhow::Result;
use apidocs_editor::{EditSession, ParseStatus};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Document to read (defaults to specFile from the config)
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn list(args: ListArgs, config: &Config, cwd: &Path) -> Result<()> {
    let path = resolve_input(args.file, config, cwd)?;
    let session = load_session(&path, config.advanced)?;

    match args.format {
        OutputFormat::Json => println!("{}", render_json(&session)?),
        OutputFormat::Text => {
            println!("📄 {}", path.display().to_string().bright_white());
            print!("{}", render_text(&session));
        }
    }

    Ok(())
}

fn status_line(status: Option<&ParseStatus>) -> String {
    match status {
        Some(ParseStatus::Parsed) => format!("{} parsed", "✓".green()),
        Some(ParseStatus::Empty) | None => format!("{} empty document", "⚠️".yellow()),
        Some(ParseStatus::Malformed { message }) => {
            format!("{} malformed: {}", "✗".red(), message)
        }
    }
}

pub(crate) fn render_text(session: &EditSession) -> String {
    let mut out = format!("   {}\n", status_line(session.parse_status()));

    let operations = session.list_operations();
    if operations.is_empty() {
        out.push_str("   No operations found\n");
        return out;
    }

    out.push_str(&format!("   {} operations\n\n", operations.len()));
    for op in operations {
        let method = format!("{:<7}", op.method.to_string());
        out.push_str(&format!("  {} {}", method.bold(), op.path));
        if !op.summary.is_empty() {
            out.push_str(&format!("  {}", op.summary.dimmed()));
        }
        out.push('\n');
    }

    out
}

pub(crate) fn render_json(session: &EditSession) -> Result<String> {
    let status = match session.parse_status() {
        Some(ParseStatus::Parsed) => json!({ "status": "parsed" }),
        Some(ParseStatus::Empty) | None => json!({ "status": "empty" }),
        Some(ParseStatus::Malformed { message }) => {
            json!({ "status": "malformed", "message": message })
        }
    };

    let report = json!({
        "parse": status,
        "operations": session.list_operations(),
    });

    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str) -> EditSession {
        let mut session = EditSession::new("list-test");
        session.ingest(text);
        session
    }

    #[test]
    fn test_json_listing() {
        let session = session(
            "paths:\n  /pets:\n    post:\n      summary: Add pet\n    get:\n      summary: List pets\n",
        );

        let value: serde_json::Value = serde_json::from_str(&render_json(&session).unwrap()).unwrap();
        assert_eq!(value["parse"]["status"], "parsed");

        let keys: Vec<_> = value["operations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|op| op["key"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["GET /pets", "POST /pets"]);
        assert_eq!(value["operations"][0]["summary"], "List pets");
        assert_eq!(value["operations"][0]["method"], "get");
    }

    #[test]
    fn test_json_reports_malformed_input() {
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&session("paths: [oops")).unwrap()).unwrap();

        assert_eq!(value["parse"]["status"], "malformed");
        assert!(value["parse"]["message"].is_string());
        assert_eq!(value["operations"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_text_listing() {
        colored::control::set_override(false);

        let text = render_text(&session("paths:\n  /pets:\n    get:\n      summary: List pets\n"));
        assert!(text.contains("1 operations"));
        assert!(text.contains("GET"));
        assert!(text.contains("/pets  List pets"));

        let empty = render_text(&session(""));
        assert!(empty.contains("empty document"));
        assert!(empty.contains("No operations found"));
    }
}
