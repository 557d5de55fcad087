//! # Action Types — Single Source of Truth
//!
//! Defines the `ActionType` enum with the 7 action categories an obligation
//! can be routed through. This is the ONE definition used across the engine.
//! Every `match` on `ActionType` must be exhaustive — adding a category
//! forces the capability router, the evidence vocabulary, and the
//! recommendation table to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category tag used to route an obligation to a responsible capability.
///
/// | # | Action type | Typical obligations |
/// |---|-------------|---------------------|
/// | 1 | Formation | Worker training, refreshers, certifications |
/// | 2 | Documentation | Registers, data sheets, written procedures |
/// | 3 | EvaluationRisque | Risk assessments, material evaluations |
/// | 4 | ConformiteLegale | Labelling, statutory filings |
/// | 5 | ComiteSst | Health-and-safety committees, representatives |
/// | 6 | Surveillance | Exposure monitoring, workplace controls |
/// | 7 | Communication | Postings, emergency numbers, notices |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Worker training and information.
    Formation,
    /// Registers, records, and written procedures.
    Documentation,
    /// Risk evaluation and analysis.
    EvaluationRisque,
    /// Statutory conformity (labelling, filings).
    ConformiteLegale,
    /// Participation mechanisms (committees, representatives).
    ComiteSst,
    /// Monitoring and workplace controls.
    Surveillance,
    /// Postings and internal communication.
    Communication,
}

/// Total number of action types. Used for coverage assertions.
pub const ACTION_TYPE_COUNT: usize = 7;

impl ActionType {
    /// Returns all 7 action types in canonical order.
    pub fn all() -> &'static [ActionType] {
        &[
            Self::Formation,
            Self::Documentation,
            Self::EvaluationRisque,
            Self::ConformiteLegale,
            Self::ComiteSst,
            Self::Surveillance,
            Self::Communication,
        ]
    }

    /// Returns the snake_case string identifier for this action type.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formation => "formation",
            Self::Documentation => "documentation",
            Self::EvaluationRisque => "evaluation_risque",
            Self::ConformiteLegale => "conformite_legale",
            Self::ComiteSst => "comite_sst",
            Self::Surveillance => "surveillance",
            Self::Communication => "communication",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = String;

    /// Parse an action type from its snake_case string identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "formation" => Ok(Self::Formation),
            "documentation" => Ok(Self::Documentation),
            "evaluation_risque" => Ok(Self::EvaluationRisque),
            "conformite_legale" => Ok(Self::ConformiteLegale),
            "comite_sst" => Ok(Self::ComiteSst),
            "surveillance" => Ok(Self::Surveillance),
            "communication" => Ok(Self::Communication),
            other => Err(format!("unknown action type: {other:?}")),
        }
    }
}
