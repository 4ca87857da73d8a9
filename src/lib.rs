//! VATA - Human vs machine code heuristics
//!
//! A deterministic, rule-based scorer that reads a block of source text and
//! reports a score, labels, risk violations and a tamper-evident integrity
//! proof. It is a triage aid, not a real authorship classifier.
//!
//! ```
//! let result = vata::score("# NOTE: retry on timeout\nfor attempt in range(3):\n    fetch()\n");
//! assert!(result.score.ends_with('%'));
//! assert!(result.proof.starts_with("Integrity Proof (SHA256): "));
//! ```

pub mod cli;
pub mod config;
pub mod detectors;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use models::{Metrics, ScoreResult};
pub use scoring::{
    score, verify_proof, Analysis, Clock, FixedClock, ProofError, ScoreBreakdown, Scorer,
    SystemClock,
};
