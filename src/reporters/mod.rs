//! Output reporters for VATA results
//!
//! Supports two output formats:
//! - `text` - The nine labeled fields, optionally colored
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::scoring::Analysis;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One scored input and where it came from
#[derive(Debug, Clone, Serialize)]
pub struct ScoredInput {
    /// File path, or `<stdin>`
    pub source: String,
    #[serde(flatten)]
    pub analysis: Analysis,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Include the score breakdown
    pub explain: bool,
    /// ANSI colors (text only)
    pub color: bool,
}

/// Render scored inputs in the given format
pub fn report(inputs: &[ScoredInput], format: OutputFormat, options: RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(inputs, options),
        OutputFormat::Json => json::render(inputs, options),
    }
}
