//! Comment and marker detection

use super::lines;
use regex::Regex;
use std::sync::OnceLock;

/// Prefixes that mark a trimmed line as a comment. Case-sensitive.
pub const COMMENT_PREFIXES: &[&str] = &["#", "//", "/*", "*", "\"\"\"", "'''"];

static MARKER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn marker_pattern() -> &'static Regex {
    MARKER_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(TODO|FIXME|HACK|NOTE|BUG|XXX)\b").expect("valid regex")
    })
}

/// True if the line, once trimmed, starts with a comment prefix.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = lines::trim(line);
    COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

/// Count whole-word task markers anywhere in the text, ignoring case.
pub fn count_markers(code: &str) -> usize {
    marker_pattern().find_iter(code).count()
}
