//! Core data models for VATA
//!
//! These models carry the measurements taken from a block of code and the
//! labeled verdict produced from them.

use serde::Serialize;

/// Scalar measurements extracted from one block of code.
///
/// Computed once per scoring call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    /// Lines whose trimmed text starts with a comment prefix
    pub comment_lines: usize,
    /// Whole-word TODO/FIXME/HACK/NOTE/BUG/XXX occurrences
    pub markers: usize,
    pub non_empty_lines: usize,
    /// Number of meaningful identifier tokens
    pub meaningful_tokens: usize,
    pub token_length_mean: f64,
    /// Sample standard deviation (n - 1); 0 with fewer than two tokens
    pub token_length_stdev: f64,
    /// Occurrences of branch keywords (`if `, `for `, `try:`, ...)
    pub branches: usize,
    /// Sum of `leading_whitespace / 4` over non-empty lines
    pub nesting: usize,
    /// Distinct repeated lines / non-empty lines
    pub duplicate_ratio: f64,
    /// Sample standard deviation of trimmed line lengths
    pub line_length_stdev: f64,
    /// Number of risk categories present (0..=4)
    pub risky: u32,
}

/// Qualitative energy level derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Energy {
    FullSoul,
    MediumSoul,
    Hybrid,
    Soulless,
    Empty,
}

impl Energy {
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            Energy::FullSoul
        } else if score >= 60 {
            Energy::MediumSoul
        } else if score >= 40 {
            Energy::Hybrid
        } else {
            Energy::Soulless
        }
    }
}

impl std::fmt::Display for Energy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Energy::FullSoul => write!(f, "Full Soul"),
            Energy::MediumSoul => write!(f, "Medium Soul"),
            Energy::Hybrid => write!(f, "Hybrid"),
            Energy::Soulless => write!(f, "Soulless"),
            Energy::Empty => write!(f, "Empty"),
        }
    }
}

/// Authorship classification. Uses strict `>` thresholds, unlike [`Energy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    HumanSoul,
    MachineHybrid,
    Soulless,
    NoCode,
}

impl Classification {
    pub fn from_score(score: i64) -> Self {
        if score > 70 {
            Classification::HumanSoul
        } else if score > 40 {
            Classification::MachineHybrid
        } else {
            Classification::Soulless
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::HumanSoul => write!(f, "HUMAN SOUL"),
            Classification::MachineHybrid => write!(f, "MACHINE / HYBRID"),
            Classification::Soulless => write!(f, "SOULLESS"),
            Classification::NoCode => write!(f, "NO CODE"),
        }
    }
}

/// Compliance verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Compliant,
    ReviewNeeded,
    Rejected,
    /// Any risk category present, regardless of score
    RejectedViolations,
    /// Empty input
    NoInput,
}

impl Verdict {
    pub fn from_score(score: i64, risky: u32) -> Self {
        if risky > 0 {
            return Verdict::RejectedViolations;
        }
        if score > 70 {
            Verdict::Compliant
        } else if score > 40 {
            Verdict::ReviewNeeded
        } else {
            Verdict::Rejected
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Compliant => write!(f, "VATA COMPLIANT"),
            Verdict::ReviewNeeded => write!(f, "VATA REVIEW NEEDED"),
            Verdict::Rejected => write!(f, "VATA REJECTED"),
            Verdict::RejectedViolations => write!(f, "VATA REJECTED (Violations)"),
            Verdict::NoInput => write!(f, "REJECTED"),
        }
    }
}

/// Coarse trust bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrustTier {
    S,
    A,
    B,
    C,
    Invalid,
}

impl TrustTier {
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            TrustTier::S
        } else if score >= 60 {
            TrustTier::A
        } else if score >= 40 {
            TrustTier::B
        } else {
            TrustTier::C
        }
    }
}

impl std::fmt::Display for TrustTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrustTier::S => write!(f, "Tier S - Trusted Human"),
            TrustTier::A => write!(f, "Tier A - Likely Safe"),
            TrustTier::B => write!(f, "Tier B - Review Recommended"),
            TrustTier::C => write!(f, "Tier C - High Risk"),
            TrustTier::Invalid => write!(f, "Tier X - Invalid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    NotApplicable,
}

impl Confidence {
    pub fn from_score(score: i64, risky: u32) -> Self {
        if risky > 0 || score > 80 {
            Confidence::High
        } else {
            Confidence::Medium
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// A displayed violation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Violation {
    DangerousOps,
    HardcodedSecrets,
    DestructiveCommands,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::DangerousOps => write!(f, "Dangerous ops"),
            Violation::HardcodedSecrets => write!(f, "Hardcoded secrets"),
            Violation::DestructiveCommands => write!(f, "Destructive cmds"),
        }
    }
}

/// Render violations one per line as `- <category>`, or `None detected`.
pub fn violations_text(violations: &[Violation]) -> String {
    if violations.is_empty() {
        return "None detected".to_string();
    }
    violations
        .iter()
        .map(|v| format!("- {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The nine display fields produced for one block of code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Integer percent, e.g. `"72%"`
    pub score: String,
    pub energy: String,
    pub classification: String,
    pub verdict: String,
    pub violations: String,
    /// The input, echoed back verbatim
    pub code: String,
    pub tier: String,
    pub confidence: String,
    pub proof: String,
}

impl ScoreResult {
    /// Fixed result for empty or whitespace-only input.
    pub fn empty(code: &str) -> Self {
        Self {
            score: "0%".to_string(),
            energy: Energy::Empty.to_string(),
            classification: Classification::NoCode.to_string(),
            verdict: Verdict::NoInput.to_string(),
            violations: "No input".to_string(),
            code: code.to_string(),
            tier: TrustTier::Invalid.to_string(),
            confidence: Confidence::NotApplicable.to_string(),
            proof: "No proof generated".to_string(),
        }
    }

    /// Field labels paired with values, in display order.
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("Score", self.score.as_str()),
            ("Energy Level", self.energy.as_str()),
            ("Classification", self.classification.as_str()),
            ("Verdict", self.verdict.as_str()),
            ("Violations", self.violations.as_str()),
            ("Input Code", self.code.as_str()),
            ("Trust Tier", self.tier.as_str()),
            ("Confidence", self.confidence.as_str()),
            ("Integrity Proof (SHA256)", self.proof.as_str()),
        ]
    }
}
