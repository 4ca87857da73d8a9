//! JSON reporter
//!
//! Outputs an array with one object per input. The breakdown is only
//! included with `--explain`.

use super::{RenderOptions, ScoredInput};
use crate::models::ScoreResult;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct Entry<'a> {
    source: &'a str,
    result: &'a ScoreResult,
}

/// Render inputs as pretty-printed JSON
pub fn render(inputs: &[ScoredInput], options: RenderOptions) -> Result<String> {
    if options.explain {
        return Ok(serde_json::to_string_pretty(inputs)?);
    }
    let entries: Vec<Entry<'_>> = inputs
        .iter()
        .map(|i| Entry {
            source: &i.source,
            result: &i.analysis.result,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
