//! # Analysis Result Aggregate
//!
//! The plain, JSON-serializable record handed back to callers (UI,
//! persistence). Produced fresh per call; the engine never persists it.

use serde::{Deserialize, Serialize};

use dataforge_core::{DocumentId, RuleId, Timestamp};
use dataforge_rules::RuleDiagnostic;

use crate::conformity::NonConformity;
use crate::obligation::Obligation;
use crate::scenario::{ActionPlan, GeneratedScenario};

/// Complete outcome of one document compliance analysis.
///
/// An empty `triggered_rules` list with score 100 means "no obligations
/// apply" — real information, distinct from a failed analysis (which is an
/// error, never a result).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceAnalysisResult {
    /// The analyzed document, as identified by the caller.
    pub document_id: DocumentId,
    /// Conformity score in [0, 100].
    pub conformity_score: u8,
    /// Ids of the rules that triggered, in declaration order.
    pub triggered_rules: Vec<RuleId>,
    /// Deduplicated citation codes of the triggered rules, sorted.
    pub legal_references: Vec<String>,
    /// Detected gaps, one per non-compliant obligation.
    pub non_conformities: Vec<NonConformity>,
    /// All generated obligations with their conformity status.
    pub obligations: Vec<Obligation>,
    /// Prioritized remediation plan.
    pub action_plan: ActionPlan,
    /// One remediation scenario per non-compliant obligation.
    pub generated_scenarios: Vec<GeneratedScenario>,
    /// Rules skipped because their condition failed to evaluate.
    pub rule_diagnostics: Vec<RuleDiagnostic>,
    /// When the analysis was produced (UTC).
    pub validation_timestamp: Timestamp,
    /// Engine version that produced the result.
    pub engine_version: String,
}
