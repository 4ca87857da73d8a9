//! Text (terminal) reporter
//!
//! Prints the nine labeled fields per input. Multi-line values (violations,
//! echoed code, proof) start on the line after their label and are written
//! unchanged, so a proof block can be copied out and verified.

use super::{RenderOptions, ScoredInput};
use crate::scoring::ScoreBreakdown;
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Color for a verdict string
fn verdict_color(verdict: &str) -> &'static str {
    match verdict {
        "VATA COMPLIANT" => "\x1b[32m",     // Green
        "VATA REVIEW NEEDED" => "\x1b[33m", // Yellow
        _ => "\x1b[31m",                    // Red
    }
}

struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    color: bool,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self { reset: RESET, bold: BOLD, dim: DIM, color }
        } else {
            Self { reset: "", bold: "", dim: "", color }
        }
    }

    fn verdict(&self, verdict: &str) -> &'static str {
        if self.color {
            verdict_color(verdict)
        } else {
            ""
        }
    }
}

/// Render inputs as terminal output
pub fn render(inputs: &[ScoredInput], options: RenderOptions) -> Result<String> {
    let p = Palette::new(options.color);
    let mut out = String::new();

    for input in inputs {
        let result = &input.analysis.result;
        out.push_str(&format!("\n{}VATA Code Analysis{}  {}\n", p.bold, p.reset, input.source));
        out.push_str(&format!(
            "{}──────────────────────────────────────{}\n",
            p.dim, p.reset
        ));

        for (label, value) in result.fields() {
            let value = if label == "Verdict" {
                format!("{}{}{}{}", p.verdict(value), p.bold, value, p.reset)
            } else {
                value.to_string()
            };
            if value.contains('\n') || label == "Input Code" {
                out.push_str(&format!("{}{}:{}\n", p.bold, label, p.reset));
                out.push_str(&value);
                if !value.ends_with('\n') {
                    out.push('\n');
                }
            } else {
                out.push_str(&format!("{}{}:{} {}\n", p.bold, label, p.reset, value));
            }
        }

        if options.explain {
            match &input.analysis.breakdown {
                Some(breakdown) => out.push_str(&render_breakdown(breakdown, &p)),
                None => out.push_str(&format!("\n{}No breakdown for empty input{}\n", p.dim, p.reset)),
            }
        }
    }

    Ok(out)
}

fn render_breakdown(b: &ScoreBreakdown, p: &Palette) -> String {
    let m = &b.metrics;
    let mut out = format!("\n{}SCORE BREAKDOWN{}\n", p.bold, p.reset);
    let base = b.raw_score - b.bonuses.total() - b.penalties.total();
    out.push_str(&format!("  Base:        {:>7.2}\n", base));
    out.push_str(&format!(
        "  Comments:    {:>+7.2}  {}({} of {} lines, {} markers){}\n",
        b.bonuses.comment, p.dim, m.comment_lines, m.non_empty_lines, m.markers, p.reset
    ));
    out.push_str(&format!(
        "  Naming:      {:>+7.2}  {}({} tokens, mean {:.2}, stdev {:.2}){}\n",
        b.bonuses.naming,
        p.dim,
        m.meaningful_tokens,
        m.token_length_mean,
        m.token_length_stdev,
        p.reset
    ));
    out.push_str(&format!(
        "  Complexity:  {:>+7.2}  {}({} branches, nesting {}){}\n",
        b.bonuses.complexity, p.dim, m.branches, m.nesting, p.reset
    ));
    out.push_str(&format!(
        "  Repetition:  {:>+7.2}  {}(duplicate ratio {:.2}){}\n",
        b.penalties.repetition, p.dim, m.duplicate_ratio, p.reset
    ));
    out.push_str(&format!(
        "  Simplicity:  {:>+7.2}  {}(line length stdev {:.2}){}\n",
        b.penalties.simplicity, p.dim, m.line_length_stdev, p.reset
    ));
    out.push_str(&format!(
        "  Risk:        {:>+7.2}  {}({} categories){}\n",
        b.penalties.risk, p.dim, m.risky, p.reset
    ));
    out.push_str(&format!(
        "  Raw:         {:>7.2}  -> {}{}%{}\n",
        b.raw_score, p.bold, b.score, p.reset
    ));
    out
}
