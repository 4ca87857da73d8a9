//! CLI command definitions and handlers

mod inputs;
mod score;
mod verify;

use crate::config::{load_config_file, load_project_config, ProjectConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// VATA - Human vs machine code heuristics
///
/// Rule-based triage, not proof of authorship.
#[derive(Parser, Debug)]
#[command(name = "vata")]
#[command(
    version,
    about = "Rule-based code analyzer: rewards comments, varied naming and complexity; penalizes repetition, risky calls and over-clean code",
    after_help = "\
Examples:
  vata score app.py                    Score one file
  cat app.py | vata score              Score stdin
  vata score src/ --format json        Score a directory as JSON
  vata score app.py --explain          Show every bonus and penalty term
  vata verify proof.txt                Recompute an integrity proof"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: vata.toml or .vatarc.json in the working directory)
    #[arg(long, global = true, env = "VATA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score code from files, directories or stdin
    #[command(after_help = "\
Examples:
  vata score main.py utils.py          Score several files
  vata score - < snippet.js            Read stdin explicitly
  vata score . --fail-on-violations    Exit code 1 if any risk is found (CI mode)")]
    Score {
        /// Files or directories to score (default: stdin)
        paths: Vec<PathBuf>,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Append the full score breakdown
        #[arg(long)]
        explain: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Exit with code 1 if any input has a risk violation
        #[arg(long)]
        fail_on_violations: bool,
    },

    /// Verify an integrity proof produced by `vata score`
    ///
    /// CRLF endings on the proof's own lines are accepted. Line endings inside
    /// the echoed code are hashed, so the proof must keep them as issued.
    Verify {
        /// File holding the proof text (default: stdin)
        file: Option<PathBuf>,
    },
}

/// Resolve project configuration: explicit file first, then the working
/// directory.
fn resolve_config(explicit: Option<&PathBuf>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            Ok(load_project_config(&cwd))
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            paths,
            format,
            output,
            explain,
            no_color,
            fail_on_violations,
        } => {
            let config = resolve_config(cli.config.as_ref())?;
            score::run(
                &config,
                score::ScoreArgs {
                    paths,
                    format,
                    output,
                    explain,
                    no_color,
                    fail_on_violations,
                },
            )
        }
        Commands::Verify { file } => verify::run(file.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_flags() {
        let cli = Cli::parse_from(["vata", "score", "a.py", "src", "-f", "json", "--explain"]);
        match cli.command {
            Commands::Score {
                paths,
                format,
                explain,
                no_color,
                ..
            } => {
                assert_eq!(paths, vec![PathBuf::from("a.py"), PathBuf::from("src")]);
                assert_eq!(format.as_deref(), Some("json"));
                assert!(explain);
                assert!(!no_color);
            }
            _ => panic!("expected score"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["vata", "score", "-f", "sarif"]).is_err());
    }
}
