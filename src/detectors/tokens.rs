//! Identifier token and branch keyword detection

use regex::Regex;
use std::sync::OnceLock;

/// Tokens ignored when measuring naming, regardless of length.
pub const STOP_WORDS: &[&str] = &[
    "def", "if", "for", "return", "else", "True", "False", "None", "self",
];

/// Substrings counted as branches. Matched literally, trailing space included.
pub const BRANCH_KEYWORDS: &[&str] = &["if ", "elif ", "for ", "while ", "try:", "except", "with "];

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN
        .get_or_init(|| Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\b").expect("valid regex"))
}

/// All identifier-like tokens, in source order.
pub fn extract_tokens(code: &str) -> Vec<&str> {
    token_pattern().find_iter(code).map(|m| m.as_str()).collect()
}

/// Longer than two characters and not a stop word.
pub fn is_meaningful_token(token: &str) -> bool {
    token.chars().count() > 2 && !STOP_WORDS.contains(&token)
}

pub fn meaningful_tokens(code: &str) -> Vec<&str> {
    extract_tokens(code)
        .into_iter()
        .filter(|t| is_meaningful_token(t))
        .collect()
}

/// Sum of non-overlapping occurrences of each branch keyword.
pub fn count_branches(code: &str) -> usize {
    BRANCH_KEYWORDS.iter().map(|kw| code.matches(kw).count()).sum()
}
