//! # Rule Evaluator
//!
//! Applies every rule's condition to a context and collects the rules that
//! trigger. The scan is linear and order-independent: rules are independent
//! of one another, so the result is the exact subset whose condition holds.
//!
//! ## Failure isolation
//!
//! A condition that cannot be evaluated (unknown or failing custom
//! predicate) marks that ONE rule as not triggered, records a
//! [`RuleDiagnostic`], and logs a warning. A malformed rule never aborts the
//! evaluation: the remaining rules still produce their obligations.

use serde::{Deserialize, Serialize};

use dataforge_core::{EvaluationContext, RuleId};

use crate::condition::PredicateRegistry;
use crate::rule::ComplianceRule;
use crate::ruleset::RuleSet;

/// Diagnostic recorded for a rule whose condition failed to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDiagnostic {
    /// The rule that was skipped.
    pub rule_id: RuleId,
    /// Why its condition could not be evaluated.
    pub message: String,
}

/// Outcome of evaluating a rule set against one context.
#[derive(Debug)]
pub struct EvaluationOutcome<'a> {
    /// Rules whose condition held, in declaration order.
    pub triggered: Vec<&'a ComplianceRule>,
    /// Rules skipped because their condition failed to evaluate.
    pub diagnostics: Vec<RuleDiagnostic>,
}

impl EvaluationOutcome<'_> {
    /// Ids of the triggered rules, in declaration order.
    pub fn triggered_ids(&self) -> Vec<RuleId> {
        self.triggered.iter().map(|r| r.id.clone()).collect()
    }
}

/// Evaluate every rule of the set against the context.
///
/// Pure and deterministic: identical inputs yield an identical outcome.
/// Complexity is O(rules × predicate cost); no short-circuiting across
/// rules.
pub fn evaluate<'a>(
    rule_set: &'a RuleSet,
    ctx: &EvaluationContext,
    predicates: &PredicateRegistry,
) -> EvaluationOutcome<'a> {
    let mut triggered = Vec::new();
    let mut diagnostics = Vec::new();

    for rule in rule_set.all() {
        match rule.condition.eval(ctx, predicates) {
            Ok(true) => triggered.push(rule),
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(
                    rule_id = %rule.id,
                    error = %err,
                    "rule condition failed to evaluate, skipping rule"
                );
                diagnostics.push(RuleDiagnostic {
                    rule_id: rule.id.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    EvaluationOutcome {
        triggered,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::lmrsst_rule_set;
    use crate::condition::Condition;
    use crate::rule::ComplianceRule;
    use dataforge_core::Severity;
    use dataforge_registry::{quebec_sst_corpus, LegalReferenceRegistry};

    fn registry() -> LegalReferenceRegistry {
        LegalReferenceRegistry::new(quebec_sst_corpus()).unwrap()
    }

    fn builtin() -> RuleSet {
        lmrsst_rule_set(&registry()).unwrap()
    }

    fn no_predicates() -> PredicateRegistry {
        PredicateRegistry::new()
    }

    #[test]
    fn construction_site_over_20_workers_triggers_threshold_rule() {
        let ctx = EvaluationContext::new("construction")
            .with_employee_count(25)
            .with_duration_months(1);
        let rules = builtin();
        let outcome = evaluate(&rules, &ctx, &no_predicates());
        let ids = outcome.triggered_ids();
        assert!(ids.iter().any(|id| id.as_str() == "chantier_seuils"));
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn small_short_construction_site_does_not_trigger_threshold_rule() {
        let ctx = EvaluationContext::new("construction")
            .with_employee_count(0)
            .with_duration_months(2);
        let rules = builtin();
        let outcome = evaluate(&rules, &ctx, &no_predicates());
        assert!(!outcome
            .triggered_ids()
            .iter()
            .any(|id| id.as_str() == "chantier_seuils"));
    }

    #[test]
    fn long_construction_site_triggers_threshold_rule_without_headcount() {
        let ctx = EvaluationContext::new("construction").with_duration_months(3);
        let rules = builtin();
        let outcome = evaluate(&rules, &ctx, &no_predicates());
        assert!(outcome
            .triggered_ids()
            .iter()
            .any(|id| id.as_str() == "chantier_seuils"));
    }

    #[test]
    fn asbestos_keyword_triggers_detection_rule() {
        let ctx = EvaluationContext::new("industrie")
            .with_keywords(["amiante"])
            .with_employee_count(5);
        let rules = builtin();
        let outcome = evaluate(&rules, &ctx, &no_predicates());
        let ids = outcome.triggered_ids();
        assert!(ids.iter().any(|id| id.as_str() == "amiante_detection"));
        // 5 employees also trigger first aid.
        assert!(ids.iter().any(|id| id.as_str() == "secourisme"));
    }

    #[test]
    fn no_chemicals_and_no_keywords_leaves_hazard_rule_silent() {
        let ctx = EvaluationContext::new("services").with_employee_count(3);
        let rules = builtin();
        let outcome = evaluate(&rules, &ctx, &no_predicates());
        assert!(!outcome
            .triggered_ids()
            .iter()
            .any(|id| id.as_str() == "produits_dangereux"));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let ctx = EvaluationContext::new("construction")
            .with_keywords(["amiante", "SIMDUT"])
            .with_employee_count(30);
        let first = evaluate(&builtin(), &ctx, &no_predicates()).triggered_ids();
        for _ in 0..5 {
            let next = evaluate(&builtin(), &ctx, &no_predicates()).triggered_ids();
            assert_eq!(first, next);
        }
    }

    #[test]
    fn triggered_exactly_matches_condition_verdicts() {
        let set = builtin();
        let ctx = EvaluationContext::new("construction")
            .with_keywords(["amiante"])
            .with_employee_count(25);
        let outcome = evaluate(&set, &ctx, &no_predicates());
        for rule in set.all() {
            let holds = rule.condition.eval(&ctx, &no_predicates()).unwrap();
            let listed = outcome.triggered.iter().any(|r| r.id == rule.id);
            assert_eq!(holds, listed, "mismatch for {}", rule.id);
        }
    }

    #[test]
    fn failing_rule_is_isolated() {
        let registry = registry();
        let mut rules = lmrsst_rule_set(&registry).unwrap().all().to_vec();
        rules.push(
            ComplianceRule::new(
                "broken_rule",
                Condition::Custom {
                    name: "unregistered".into(),
                },
                Severity::Low,
            )
            .with_obligations(["N/A"])
            .with_legal_refs(["S-2.1"]),
        );
        let set = RuleSet::new(rules, &registry).unwrap();

        let ctx = EvaluationContext::new("construction").with_employee_count(25);
        let outcome = evaluate(&set, &ctx, &PredicateRegistry::new());

        // The threshold rule still triggered.
        assert!(outcome
            .triggered_ids()
            .iter()
            .any(|id| id.as_str() == "chantier_seuils"));
        // The broken rule is recorded, not triggered.
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].rule_id.as_str(), "broken_rule");
        assert!(!outcome
            .triggered_ids()
            .iter()
            .any(|id| id.as_str() == "broken_rule"));
    }

    #[test]
    fn diagnostic_serde_roundtrip() {
        let diagnostic = RuleDiagnostic {
            rule_id: RuleId::new("broken_rule"),
            message: "unknown custom predicate".into(),
        };
        let json = serde_json::to_string(&diagnostic).unwrap();
        let parsed: RuleDiagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(diagnostic, parsed);
    }
}
