use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "apidocs.config.json";

/// File names recognized as API documents, in priority order
pub const DEFAULT_SPEC_CANDIDATES: [&str; 6] = [
    "openapi.yaml",
    "openapi.yml",
    "openapi.json",
    "swagger.yaml",
    "swagger.yml",
    "swagger.json",
];

/// apidocs configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Write implementation notes back on edit
    #[serde(default)]
    pub advanced: bool,

    /// Document used when a command is given no file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_file: Option<String>,

    /// File names searched by `detect`
    #[serde(default = "default_spec_candidates")]
    pub spec_candidates: Vec<String>,
}

fn default_spec_candidates() -> Vec<String> {
    DEFAULT_SPEC_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Absolute path of the configured document, if any
    pub fn spec_path(&self, cwd: &Path) -> Option<PathBuf> {
        self.spec_file.as_ref().map(|file| cwd.join(file))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advanced: false,
            spec_file: None,
            spec_candidates: default_spec_candidates(),
        }
    }
}
