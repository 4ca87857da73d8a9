//! Heuristic authorship scoring
//!
//! Scores a block of code on how "human" it reads. The pipeline runs in a
//! fixed order with no shared state between calls:
//!
//! 1. Input guard - empty or whitespace-only input returns a fixed result
//! 2. Metric extraction ([`metrics`])
//! 3. Bonus and penalty terms ([`model`])
//! 4. Aggregation into a clamped integer percentage
//! 5. Labels, violations and the integrity proof ([`labels`], [`proof`])
//!
//! # Scoring Formula
//!
//! ```text
//! raw   = 40 + comment + naming + complexity + repetition + simplicity + risk
//! score = clamp(round_half_even(raw), 5, 95)
//!
//!   comment     = comment_lines / max(non_empty_lines, 1) × 40 + markers × 10
//!   naming      = mean_token_len × 3 + stdev_token_len × 5
//!   complexity  = min((branches + nesting) × 2, 30)
//!   repetition  = duplicate_ratio × -50
//!   simplicity  = -max(0, 25 - line_len_stdev × 1.2)
//!   risk        = risky × -20
//! ```
//!
//! The wall clock is read once per non-empty call, only for the proof.

pub mod labels;
pub mod metrics;
pub mod model;
pub mod proof;

pub use labels::Labels;
pub use model::{Bonuses, Penalties, ScoringWeights};
pub use proof::{sha256_hex, verify_proof, IntegrityProof, ProofError, VerifiedProof};

use crate::detectors;
use crate::models::{violations_text, Metrics, ScoreResult, Violation};
use serde::Serialize;
use tracing::{debug, info};

/// Source of the timestamp embedded in integrity proofs.
pub trait Clock: Send + Sync {
    /// Whole seconds since the Unix epoch
    fn unix_seconds(&self) -> i64;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Always returns the same second.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_seconds(&self) -> i64 {
        self.0
    }
}

/// Every intermediate value behind a score
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub metrics: Metrics,
    pub bonuses: Bonuses,
    pub penalties: Penalties,
    /// Before rounding and clamping
    pub raw_score: f64,
    pub score: i64,
    pub labels: Labels,
    pub violations: Vec<Violation>,
    pub proof: IntegrityProof,
    /// Seconds used in the proof preimage
    pub timestamp: i64,
}

/// A result plus the breakdown that produced it. The breakdown is `None`
/// for empty input.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub result: ScoreResult,
    pub breakdown: Option<ScoreBreakdown>,
}

/// Round half to even, then clamp into `[min, max]`.
pub fn aggregate(weights: &ScoringWeights, bonuses: &Bonuses, penalties: &Penalties) -> (f64, i64) {
    let raw = weights.base_score + bonuses.total() + penalties.total();
    let score = raw
        .round_ties_even()
        .clamp(weights.min_score, weights.max_score);
    (raw, score as i64)
}

/// Scoring pipeline
pub struct Scorer<C: Clock = SystemClock> {
    weights: ScoringWeights,
    clock: C,
}

impl Scorer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Scorer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Scorer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            weights: ScoringWeights::default(),
            clock,
        }
    }

    /// Score code, returning only the nine display fields.
    pub fn score(&self, code: &str) -> ScoreResult {
        self.analyze(code).result
    }

    /// Score code and keep the full breakdown.
    pub fn analyze(&self, code: &str) -> Analysis {
        if detectors::lines::trim(code).is_empty() {
            debug!("Empty input, skipping analysis");
            return Analysis {
                result: ScoreResult::empty(code),
                breakdown: None,
            };
        }

        let metrics = metrics::extract(code);
        debug!(
            "Metrics: {} lines, {} comments, {} markers, {} tokens, {} branches, nesting {}, dup {:.2}, risky {}",
            metrics.non_empty_lines,
            metrics.comment_lines,
            metrics.markers,
            metrics.meaningful_tokens,
            metrics.branches,
            metrics.nesting,
            metrics.duplicate_ratio,
            metrics.risky
        );

        let bonuses = self.weights.bonuses(&metrics);
        let penalties = self.weights.penalties(&metrics);
        debug!(
            "Bonuses: comment={:.1}, naming={:.1}, complexity={:.1}; penalties: repetition={:.1}, simplicity={:.1}, risk={:.1}",
            bonuses.comment,
            bonuses.naming,
            bonuses.complexity,
            penalties.repetition,
            penalties.simplicity,
            penalties.risk
        );

        let (raw_score, score) = aggregate(&self.weights, &bonuses, &penalties);
        let score_str = format!("{score}%");
        let labels = Labels::derive(score, metrics.risky);
        let violations = detectors::violations(code);
        let verdict = labels.verdict.to_string();

        let timestamp = self.clock.unix_seconds();
        let proof = IntegrityProof::generate(code, &score_str, &verdict, timestamp);

        info!("Score: {} (raw {:.2}) - {}", score_str, raw_score, verdict);

        let result = ScoreResult {
            score: score_str,
            energy: labels.energy.to_string(),
            classification: labels.classification.to_string(),
            verdict,
            violations: violations_text(&violations),
            code: code.to_string(),
            tier: labels.tier.to_string(),
            confidence: labels.confidence.to_string(),
            proof: proof.to_string(),
        };

        Analysis {
            result,
            breakdown: Some(ScoreBreakdown {
                metrics,
                bonuses,
                penalties,
                raw_score,
                score,
                labels,
                violations,
                proof,
                timestamp,
            }),
        }
    }
}

/// Score code with the system clock.
pub fn score(code: &str) -> ScoreResult {
    Scorer::new().score(code)
}
