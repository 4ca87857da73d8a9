//! Input collection for the score command

use crate::config::ProjectConfig;
use anyhow::{Context, Result};
use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const STDIN_SOURCE: &str = "<stdin>";

/// A block of code and where it came from
#[derive(Debug, Clone)]
pub struct SourceText {
    pub source: String,
    pub code: String,
}

/// Files to score for the given paths. Directories are walked honoring
/// .gitignore and the configured extensions and excludes; explicit files
/// are always kept.
pub fn collect_files(paths: &[PathBuf], config: &ProjectConfig) -> Result<Vec<PathBuf>> {
    let extensions = config.extensions();
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = walk_dir(path, &extensions, &config.scan.exclude)?;
            found.sort();
            debug!("Found {} files under {}", found.len(), path.display());
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn walk_dir(dir: &Path, extensions: &[String], exclude: &[String]) -> Result<Vec<PathBuf>> {
    let mut overrides = OverrideBuilder::new(dir);
    for pattern in exclude {
        overrides
            .add(&format!("!{pattern}"))
            .with_context(|| format!("Invalid exclude pattern '{pattern}'"))?;
    }
    let overrides = overrides.build()?;

    let walker = WalkBuilder::new(dir)
        .hidden(true)
        .git_ignore(true)
        .overrides(overrides)
        .build();

    let mut files = Vec::new();
    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if extensions.contains(&ext) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Read a file as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_file(path: &Path) -> Result<SourceText> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let code = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(SourceText {
        source: path.display().to_string(),
        code,
    })
}

pub fn read_stdin() -> Result<SourceText> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(SourceText {
        source: STDIN_SOURCE.to_string(),
        code: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Whether the paths ask for stdin: none given, or a lone `-`.
pub fn wants_stdin(paths: &[PathBuf]) -> bool {
    paths.is_empty() || (paths.len() == 1 && paths[0] == Path::new("-"))
}
