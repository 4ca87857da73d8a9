//! Metric extraction
//!
//! Turns raw text into the [`Metrics`] record. Every measurement falls back
//! to 0 where it would otherwise divide by zero or need more samples than
//! exist, so any string input produces a complete record.

use crate::detectors;
use crate::detectors::lines::{indent_width, split_lines, trim};
use crate::models::Metrics;
use std::collections::HashMap;

/// Leading whitespace characters that make up one nesting level.
const INDENT_WIDTH: usize = 4;

/// Extract all metrics from a non-empty block of code.
pub fn extract(code: &str) -> Metrics {
    let lines = split_lines(code);
    let trimmed: Vec<&str> = lines
        .iter()
        .map(|&l| trim(l))
        .filter(|l| !l.is_empty())
        .collect();

    let comment_lines = lines.iter().filter(|l| detectors::is_comment_line(l)).count();

    let token_lengths: Vec<f64> = detectors::meaningful_tokens(code)
        .iter()
        .map(|t| t.chars().count() as f64)
        .collect();

    let line_lengths: Vec<f64> = trimmed.iter().map(|l| l.chars().count() as f64).collect();

    Metrics {
        comment_lines,
        markers: detectors::count_markers(code),
        non_empty_lines: trimmed.len(),
        meaningful_tokens: token_lengths.len(),
        token_length_mean: mean(&token_lengths),
        token_length_stdev: sample_stdev(&token_lengths),
        branches: detectors::count_branches(code),
        nesting: nesting_depth(&lines),
        duplicate_ratio: duplicate_ratio(&trimmed),
        line_length_stdev: sample_stdev(&line_lengths),
        risky: detectors::risk_count(code),
    }
}

/// Sum of indentation levels over non-empty lines.
pub fn nesting_depth(lines: &[&str]) -> usize {
    lines
        .iter()
        .filter(|l| !trim(l).is_empty())
        .map(|l| indent_width(l) / INDENT_WIDTH)
        .sum()
}

/// Share of distinct trimmed lines that appear more than once, over all
/// non-empty lines.
pub fn duplicate_ratio(trimmed: &[&str]) -> f64 {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for line in trimmed {
        *counts.entry(*line).or_default() += 1;
    }
    let repeated = counts.values().filter(|&&c| c > 1).count();
    repeated as f64 / trimmed.len().max(1) as f64
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with an `n - 1` denominator.
pub fn sample_stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stdev() {
        assert_eq!(sample_stdev(&[]), 0.0);
        assert_eq!(sample_stdev(&[7.0]), 0.0);
        assert!((sample_stdev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 2.138).abs() < 0.001);
    }

    #[test]
    fn test_single_assignment() {
        let m = extract("x=1");
        assert_eq!(m.non_empty_lines, 1);
        assert_eq!(m.comment_lines, 0);
        assert_eq!(m.meaningful_tokens, 0);
        assert_eq!(m.token_length_mean, 0.0);
        assert_eq!(m.token_length_stdev, 0.0);
        assert_eq!(m.line_length_stdev, 0.0);
        assert_eq!(m.duplicate_ratio, 0.0);
        assert_eq!(m.risky, 0);
    }

    #[test]
    fn test_comment_and_blank_lines() {
        let code = "# header\n\nvalue = compute()\n    // note here\n";
        let m = extract(code);
        assert_eq!(m.comment_lines, 2);
        assert_eq!(m.non_empty_lines, 3);
        assert_eq!(m.markers, 1);
    }

    #[test]
    fn test_nesting_depth() {
        let lines = vec!["def f():", "    if x:", "        return 1", "   ", "\treturn 2"];
        // 0 + 1 + 2, blank line skipped, a single tab is one char
        assert_eq!(nesting_depth(&lines), 3);
    }

    #[test]
    fn test_duplicate_ratio_counts_distinct_groups() {
        let trimmed = vec!["pass", "pass", "pass", "x = 1"];
        assert_eq!(duplicate_ratio(&trimmed), 0.25);
        let trimmed = vec!["a", "a", "b", "b"];
        assert_eq!(duplicate_ratio(&trimmed), 0.5);
        assert_eq!(duplicate_ratio(&[]), 0.0);
    }

    #[test]
    fn test_duplicates_compare_trimmed_lines() {
        let m = extract("return value\n    return value\n");
        assert_eq!(m.non_empty_lines, 2);
        assert_eq!(m.duplicate_ratio, 0.5);
    }

    #[test]
    fn test_token_statistics() {
        // meaningful: alpha(5), beta(4), gamma(5)
        let m = extract("alpha = beta + gamma");
        assert_eq!(m.meaningful_tokens, 3);
        assert!((m.token_length_mean - 14.0 / 3.0).abs() < 1e-9);
        assert!((m.token_length_stdev - (1.0f64 / 3.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_carriage_return_only_endings() {
        let m = extract("a = 1\rb = 22\r# comment\rc = 333333");
        assert_eq!(m.non_empty_lines, 4);
        assert_eq!(m.comment_lines, 1);
        // trimmed lengths 5, 6, 9, 10
        assert!((m.line_length_stdev - (17.0f64 / 3.0).sqrt()).abs() < 1e-9);

        let m = extract("def f():\r    if x:\r        return 1\r");
        assert_eq!(m.non_empty_lines, 3);
        assert_eq!(m.nesting, 3);
    }

    #[test]
    fn test_form_feed_and_unicode_separators() {
        let m = extract("x = 1\x0cy = 2\x0c# note\x0cz = 3");
        assert_eq!(m.non_empty_lines, 4);
        assert_eq!(m.comment_lines, 1);
        assert_eq!(m.markers, 1);

        let m = extract("line one\u{2028}# second line TODO\u{2028}third");
        assert_eq!(m.non_empty_lines, 3);
        assert_eq!(m.comment_lines, 1);
        assert_eq!(m.markers, 1);

        let m = extract("\u{85}x = 1\u{85}y = 22");
        assert_eq!(m.non_empty_lines, 2);
        assert_eq!(m.duplicate_ratio, 0.0);
    }
}
