//! Bonus and penalty model
//!
//! Converts [`Metrics`] into three bonus terms and three penalty terms.
//! All weights live in [`ScoringWeights`]; the defaults are the scoring
//! contract and are not read from configuration.

use crate::models::Metrics;
use serde::Serialize;

/// Fixed heuristic weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringWeights {
    /// Starting point before bonuses and penalties
    pub base_score: f64,
    /// Multiplier on the comment-line ratio
    pub comment_ratio_weight: f64,
    /// Points per task marker
    pub marker_weight: f64,
    pub token_mean_weight: f64,
    pub token_stdev_weight: f64,
    /// Points per branch or nesting level
    pub complexity_weight: f64,
    pub complexity_cap: f64,
    /// Points lost at a duplicate ratio of 1.0
    pub repetition_weight: f64,
    /// Penalty when line lengths do not vary at all
    pub simplicity_threshold: f64,
    /// How much each unit of line-length stdev reduces the simplicity penalty
    pub line_stdev_weight: f64,
    /// Points lost per risk category
    pub risk_weight: f64,
    pub min_score: f64,
    pub max_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_score: 40.0,
            comment_ratio_weight: 40.0,
            marker_weight: 10.0,
            token_mean_weight: 3.0,
            token_stdev_weight: 5.0,
            complexity_weight: 2.0,
            complexity_cap: 30.0,
            repetition_weight: 50.0,
            simplicity_threshold: 25.0,
            line_stdev_weight: 1.2,
            risk_weight: 20.0,
            min_score: 5.0,
            max_score: 95.0,
        }
    }
}

/// Positive score contributions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bonuses {
    pub comment: f64,
    pub naming: f64,
    pub complexity: f64,
}

impl Bonuses {
    pub fn total(&self) -> f64 {
        self.comment + self.naming + self.complexity
    }
}

/// Score deductions. Every term is zero or negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Penalties {
    pub repetition: f64,
    pub simplicity: f64,
    pub risk: f64,
}

impl Penalties {
    pub fn total(&self) -> f64 {
        self.repetition + self.simplicity + self.risk
    }
}

impl ScoringWeights {
    /// Comment density plus task markers.
    pub fn comment_bonus(&self, m: &Metrics) -> f64 {
        let ratio = m.comment_lines as f64 / m.non_empty_lines.max(1) as f64;
        ratio * self.comment_ratio_weight + m.markers as f64 * self.marker_weight
    }

    /// Longer and more varied identifiers read as human naming.
    pub fn naming_bonus(&self, m: &Metrics) -> f64 {
        if m.meaningful_tokens == 0 {
            return 0.0;
        }
        m.token_length_mean * self.token_mean_weight
            + m.token_length_stdev * self.token_stdev_weight
    }

    pub fn complexity_bonus(&self, m: &Metrics) -> f64 {
        ((m.branches + m.nesting) as f64 * self.complexity_weight).min(self.complexity_cap)
    }

    pub fn repetition_penalty(&self, m: &Metrics) -> f64 {
        -(m.duplicate_ratio * self.repetition_weight)
    }

    /// Uniform line lengths are penalized; enough variation cancels it.
    pub fn simplicity_penalty(&self, m: &Metrics) -> f64 {
        -(self.simplicity_threshold - m.line_length_stdev * self.line_stdev_weight).max(0.0)
    }

    pub fn risk_penalty(&self, m: &Metrics) -> f64 {
        -(m.risky as f64 * self.risk_weight)
    }

    pub fn bonuses(&self, m: &Metrics) -> Bonuses {
        Bonuses {
            comment: self.comment_bonus(m),
            naming: self.naming_bonus(m),
            complexity: self.complexity_bonus(m),
        }
    }

    pub fn penalties(&self, m: &Metrics) -> Penalties {
        Penalties {
            repetition: self.repetition_penalty(m),
            simplicity: self.simplicity_penalty(m),
            risk: self.risk_penalty(m),
        }
    }
}
