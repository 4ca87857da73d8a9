//! Categorical labels derived from the final score and risk count

use crate::models::{Classification, Confidence, Energy, TrustTier, Verdict};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub energy: Energy,
    pub classification: Classification,
    pub verdict: Verdict,
    pub tier: TrustTier,
    pub confidence: Confidence,
}

impl Labels {
    pub fn derive(score: i64, risky: u32) -> Self {
        Self {
            energy: Energy::from_score(score),
            classification: Classification::from_score(score),
            verdict: Verdict::from_score(score, risky),
            tier: TrustTier::from_score(score),
            confidence: Confidence::from_score(score, risky),
        }
    }
}
