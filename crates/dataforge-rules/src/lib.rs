//! # dataforge-rules — Compliance Rule Layer
//!
//! Rules map trigger conditions over an evaluation context to regulatory
//! obligations. This crate defines the condition expression language, the
//! rule and rule-set types with their load-time validation, the built-in
//! LMRSST rule set, and the evaluator.
//!
//! ## Architecture
//!
//! - **Condition** (`condition.rs`): conditions are data, not closures — a
//!   serde-tagged expression tree evaluated by an interpreter, with a
//!   `Custom` variant resolved through an explicit predicate registry.
//!
//! - **Rule** (`rule.rs`): `ComplianceRule` with obligations, legal
//!   references, severity, and sector scope.
//!
//! - **RuleSet** (`ruleset.rs`): declaration-ordered collection, validated
//!   against the legal reference registry at construction.
//!
//! - **Builtin** (`builtin.rs`): the LMRSST rule set (asbestos, construction
//!   site thresholds, hazardous products, first aid).
//!
//! - **Evaluator** (`evaluator.rs`): linear scan with per-rule failure
//!   isolation. A rule whose condition cannot be evaluated is skipped and
//!   recorded as a diagnostic; it never aborts the evaluation.
//!
//! ## Determinism
//!
//! Evaluation is a pure function of `(RuleSet, EvaluationContext,
//! PredicateRegistry)`: conditions have no side effects, the scan order is
//! the declaration order, and identical inputs produce identical outcomes.

pub mod builtin;
pub mod condition;
pub mod evaluator;
pub mod rule;
pub mod ruleset;

pub use builtin::lmrsst_rule_set;
pub use condition::{Condition, ConditionError, PredicateRegistry};
pub use evaluator::{evaluate, EvaluationOutcome, RuleDiagnostic};
pub use rule::ComplianceRule;
pub use ruleset::RuleSet;
