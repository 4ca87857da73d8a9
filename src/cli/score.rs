//! Score command - score files, directories or stdin

use super::inputs::{self, SourceText};
use crate::config::ProjectConfig;
use crate::reporters::{self, OutputFormat, RenderOptions, ScoredInput};
use crate::scoring::Scorer;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug)]
pub struct ScoreArgs {
    pub paths: Vec<PathBuf>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub explain: bool,
    pub no_color: bool,
    pub fail_on_violations: bool,
}

pub fn run(config: &ProjectConfig, args: ScoreArgs) -> Result<()> {
    let format_str = args
        .format
        .as_deref()
        .or(config.defaults.format.as_deref())
        .unwrap_or("text");
    let format = OutputFormat::from_str(format_str)?;

    let sources = if inputs::wants_stdin(&args.paths) {
        vec![inputs::read_stdin()?]
    } else {
        let files = inputs::collect_files(&args.paths, config)?;
        if files.is_empty() {
            warn!("No files to score");
        }
        files
            .iter()
            .map(|f| inputs::read_file(f))
            .collect::<Result<Vec<SourceText>>>()?
    };

    let scored = score_all(&Scorer::new(), sources);
    info!("Scored {} input(s)", scored.len());

    let color = !args.no_color
        && args.output.is_none()
        && config.color()
        && std::io::stdout().is_terminal();
    let options = RenderOptions {
        explain: args.explain || config.explain(),
        color,
    };
    let rendered = reporters::report(&scored, format, options)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    if args.fail_on_violations && has_violations(&scored) {
        eprintln!("Risk violations found, failing as requested (--fail-on-violations)");
        std::process::exit(1);
    }
    Ok(())
}

/// Score inputs in parallel; output order matches input order.
pub fn score_all<C: crate::scoring::Clock>(
    scorer: &Scorer<C>,
    sources: Vec<SourceText>,
) -> Vec<ScoredInput> {
    sources
        .into_par_iter()
        .map(|s| ScoredInput {
            analysis: scorer.analyze(&s.code),
            source: s.source,
        })
        .collect()
}

fn has_violations(scored: &[ScoredInput]) -> bool {
    scored.iter().any(|s| {
        s.analysis
            .breakdown
            .as_ref()
            .is_some_and(|b| b.metrics.risky > 0)
    })
}
