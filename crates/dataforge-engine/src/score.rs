//! # Conformity Scoring
//!
//! The conformity score starts at 100 and loses a severity-weighted penalty
//! for every non-compliant obligation, clamped to [0, 100]. Weights are
//! caller-tunable configuration with documented defaults, never hardcoded
//! in the computation.

use serde::{Deserialize, Serialize};

use dataforge_core::Severity;

use crate::obligation::Obligation;

/// Severity-weighted penalties applied per non-compliant obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Penalty per critical non-compliant obligation.
    pub critical: u8,
    /// Penalty per high-severity non-compliant obligation.
    pub high: u8,
    /// Penalty per medium-severity non-compliant obligation.
    pub medium: u8,
    /// Penalty per low-severity non-compliant obligation.
    pub low: u8,
}

impl Default for ScoringWeights {
    /// Default weights: Critical=25, High=15, Medium=8, Low=3.
    fn default() -> Self {
        Self {
            critical: 25,
            high: 15,
            medium: 8,
            low: 3,
        }
    }
}

impl ScoringWeights {
    /// Penalty for one non-compliant obligation of the given severity.
    pub fn penalty(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => u32::from(self.critical),
            Severity::High => u32::from(self.high),
            Severity::Medium => u32::from(self.medium),
            Severity::Low => u32::from(self.low),
        }
    }
}

/// Compute the conformity score for a set of assessed obligations.
///
/// Only non-compliant obligations contribute penalties; the result is
/// clamped so it never leaves [0, 100]. With no obligations at all the
/// score is 100 ("nothing triggered" is real, score-relevant information).
pub fn compliance_score(weights: &ScoringWeights, obligations: &[Obligation]) -> u8 {
    let total_penalty: u32 = obligations
        .iter()
        .filter(|o| !o.is_compliant)
        .map(|o| weights.penalty(o.severity))
        .sum();
    100u32.saturating_sub(total_penalty) as u8
}
