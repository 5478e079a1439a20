use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Project directory to search
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

pub fn detect(args: DetectArgs, config: &Config, cwd: &Path) -> Result<()> {
    let root = cwd.join(&args.dir);

    match find_spec(&root, &config.spec_candidates)? {
        Some(relative) => {
            println!("{}", relative);
            Ok(())
        }
        None => Err(anyhow!(
            "No API document found under {} (looked for {})",
            root.display(),
            config.spec_candidates.join(", ").bright_white()
        )),
    }
}

/// First file under `root` whose name matches a candidate, case-insensitively.
///
/// Directories are walked in file-name order. The result is relative to
/// `root` and uses `/` separators.
pub fn find_spec(root: &Path, candidates: &[String]) -> Result<Option<String>> {
    if !root.is_dir() {
        return Err(anyhow!("Not a directory: {}", root.display()));
    }

    let candidates: Vec<String> = candidates.iter().map(|c| c.to_lowercase()).collect();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_lowercase();
        if !candidates.contains(&name) {
            continue;
        }

        let relative = entry.path().strip_prefix(root)?;
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        debug!(path = %relative, "Found API document");
        return Ok(Some(relative));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SPEC_CANDIDATES;
    use std::fs;

    fn candidates() -> Vec<String> {
        DEFAULT_SPEC_CANDIDATES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_finds_nested_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("service/api")).unwrap();
        fs::write(dir.path().join("service/api/openapi.yaml"), "openapi: 3.0.0\n").unwrap();
        fs::write(dir.path().join("README.md"), "# service\n").unwrap();

        let found = find_spec(dir.path(), &candidates()).unwrap();
        assert_eq!(found.as_deref(), Some("service/api/openapi.yaml"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Swagger.JSON"), "{}").unwrap();

        let found = find_spec(dir.path(), &candidates()).unwrap();
        assert_eq!(found.as_deref(), Some("Swagger.JSON"));
    }

    #[test]
    fn test_directories_named_like_candidates_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("openapi.yaml")).unwrap();

        assert_eq!(find_spec(dir.path(), &candidates()).unwrap(), None);
    }

    #[test]
    fn test_custom_candidates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("openapi.yaml"), "").unwrap();
        fs::write(dir.path().join("api.yaml"), "").unwrap();

        let found = find_spec(dir.path(), &["API.yaml".to_string()]).unwrap();
        assert_eq!(found.as_deref(), Some("api.yaml"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_spec(&dir.path().join("nope"), &candidates()).is_err());
    }

    #[test]
    fn test_detect_fails_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let args = DetectArgs { dir: PathBuf::from(".") };
        assert!(detect(args, &Config::default(), dir.path()).is_err());
    }
}
