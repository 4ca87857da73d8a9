//! Risk and violation detection
//!
//! Two views over the same text. [`risk_count`] feeds the score penalty;
//! [`violations`] produces the categories shown to the user. They use
//! different keyword sets: `token =` raises the risk count but is not
//! listed as a hardcoded secret, and the displayed "Dangerous ops" set is
//! narrower than the risk set.

use crate::models::Violation;
use regex::Regex;
use std::sync::OnceLock;

/// Dangerous operations that raise the risk count. Matched on lowercased text.
pub const DANGEROUS_OPS: &[&str] = &[
    "eval(",
    "exec(",
    "os.system(",
    "subprocess.",
    "pickle.load",
    "rm -rf",
    "format c:",
    "del *.*",
];

/// Secret-looking assignments that raise the risk count.
pub const SECRET_PATTERNS: &[&str] = &[
    "password =",
    "api_key =",
    "secret =",
    "token =",
    "hardcoded",
];

const VIOLATION_DANGEROUS_OPS: &[&str] = &["os.system(", "subprocess.", "exec(", "eval("];
const VIOLATION_SECRETS: &[&str] = &["password =", "api_key =", "secret ="];
const VIOLATION_DESTRUCTIVE: &[&str] = &["rm -rf", "del *.*", "format "];

static BROAD_EXCEPTS: OnceLock<[Regex; 2]> = OnceLock::new();

fn broad_excepts() -> &'static [Regex; 2] {
    BROAD_EXCEPTS.get_or_init(|| {
        [
            Regex::new(r"except\s*:").expect("valid regex"),
            Regex::new(r"except Exception\s*:").expect("valid regex"),
        ]
    })
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Expects lowercased text.
pub fn has_dangerous_op(lower: &str) -> bool {
    contains_any(lower, DANGEROUS_OPS)
}

/// Expects lowercased text.
pub fn has_secret_pattern(lower: &str) -> bool {
    contains_any(lower, SECRET_PATTERNS)
}

/// Number of broad except forms present (bare `except:` and
/// `except Exception:`), each counted once. Case-sensitive.
pub fn broad_except_count(code: &str) -> u32 {
    broad_excepts().iter().filter(|re| re.is_match(code)).count() as u32
}

/// Risk categories present in the code, 0..=4.
pub fn risk_count(code: &str) -> u32 {
    let lower = code.to_lowercase();
    u32::from(has_dangerous_op(&lower))
        + u32::from(has_secret_pattern(&lower))
        + broad_except_count(code)
}

/// Displayed violation categories, in fixed order.
pub fn violations(code: &str) -> Vec<Violation> {
    let lower = code.to_lowercase();
    let mut found = Vec::new();
    if contains_any(&lower, VIOLATION_DANGEROUS_OPS) {
        found.push(Violation::DangerousOps);
    }
    if contains_any(&lower, VIOLATION_SECRETS) {
        found.push(Violation::HardcodedSecrets);
    }
    if contains_any(&lower, VIOLATION_DESTRUCTIVE) {
        found.push(Violation::DestructiveCommands);
    }
    found
}
