//! Text pattern detectors
//!
//! Small pure predicates over raw or lowercased source text. Each one matches
//! a fixed keyword set and knows nothing about scoring weights.
//!
//! - [`lines`] - line splitting and whitespace trimming
//! - [`comments`] - comment-line prefixes and TODO-style markers
//! - [`tokens`] - identifier tokens and branch keywords
//! - [`risk`] - dangerous operations, hardcoded secrets, broad excepts and
//!   the displayed violation categories

pub mod comments;
pub mod lines;
pub mod risk;
pub mod tokens;

pub use comments::{count_markers, is_comment_line};
pub use lines::split_lines;
pub use risk::{
    broad_except_count, has_dangerous_op, has_secret_pattern, risk_count, violations,
};
pub use tokens::{count_branches, extract_tokens, is_meaningful_token, meaningful_tokens};
