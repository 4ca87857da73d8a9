//! Project-level configuration support
//!
//! Loads configuration from `vata.toml` or `.vatarc.json` in the working
//! directory, or from an explicit path.
//!
//! # Configuration Format
//!
//! ```toml
//! # vata.toml
//!
//! [defaults]
//! format = "json"   # text or json
//! explain = true    # append the score breakdown
//! color = false
//!
//! [scan]
//! extensions = ["py", "js", "rs"]
//! exclude = ["vendor/", "generated/**"]
//! ```
//!
//! Scoring weights are fixed and cannot be set here.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Extensions scored when walking a directory, unless overridden.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "py", "js", "ts", "jsx", "tsx", "rs", "go", "java", "rb", "php", "cs", "cpp", "c", "h",
    "ps1", "sh",
];

/// Project configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,

    /// Directory scanning options
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Default values for CLI flags. Flags given on the command line win.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Append the score breakdown by default
    #[serde(default)]
    pub explain: Option<bool>,

    /// Colored text output
    #[serde(default)]
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanConfig {
    /// File extensions to score when walking directories (without dot)
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Gitignore-style patterns to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl ProjectConfig {
    /// Extensions to score, falling back to [`DEFAULT_EXTENSIONS`].
    pub fn extensions(&self) -> Vec<String> {
        if self.scan.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            self.scan
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect()
        }
    }

    pub fn color(&self) -> bool {
        self.defaults.color.unwrap_or(true)
    }

    pub fn explain(&self) -> bool {
        self.defaults.explain.unwrap_or(false)
    }
}

/// Load configuration for a directory.
///
/// Tries `vata.toml`, then `.vatarc.json`. A file that fails to parse is
/// logged and skipped; with nothing usable, defaults are returned.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join("vata.toml");
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(".vatarc.json");
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load an explicitly named config file. Unlike [`load_project_config`],
/// errors are returned to the caller.
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        load_json_config(path)
    } else {
        load_toml_config(path)
    }
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}
