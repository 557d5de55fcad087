//! # Condition Expression Language
//!
//! Rule conditions are data: a tagged expression tree evaluated by a small
//! interpreter. This keeps rule sets serializable, diffable, and free of
//! hidden captured state.
//!
//! The `Custom` variant is the escape hatch for conditions the expression
//! language cannot express. It names an entry in a [`PredicateRegistry`] —
//! an explicit lookup table of pure closures. Registered predicates must not
//! capture or mutate shared state; this is a contract enforced by review and
//! tests, not by the type system.
//!
//! ## Failure semantics
//!
//! Evaluating an expression can fail (unknown or failing custom predicate).
//! The evaluator treats a failed condition as "rule not triggered" and
//! records a diagnostic; see `evaluator.rs`.
//!
//! ## Neutral elements
//!
//! `AllOf([])` is true and `AnyOf([])` is false, matching the usual
//! conjunction/disjunction identities.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dataforge_core::{EvaluationContext, RiskLevel};

/// Error evaluating a condition expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// A `Custom` condition names a predicate that is not registered.
    #[error("unknown custom predicate: {name:?}")]
    UnknownPredicate {
        /// The unresolvable predicate name.
        name: String,
    },

    /// A registered predicate reported a failure.
    #[error("custom predicate {name:?} failed: {reason}")]
    PredicateFailed {
        /// The failing predicate name.
        name: String,
        /// The failure reported by the predicate.
        reason: String,
    },
}

/// A rule trigger condition over an [`EvaluationContext`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// The given keyword was extracted from the document.
    KeywordPresent {
        /// Keyword to look for (case-insensitive).
        keyword: String,
    },
    /// At least one of the given keywords was extracted.
    AnyKeywordOf {
        /// Keywords to look for (case-insensitive).
        keywords: Vec<String>,
    },
    /// The given substance was detected in the document.
    SubstanceDetected {
        /// Substance name (case-insensitive).
        substance: String,
    },
    /// The organization operates in the given sector.
    SectorIs {
        /// Sector tag (case-insensitive).
        sector: String,
    },
    /// The organization employs at least `count` workers.
    EmployeeCountAtLeast {
        /// Minimum headcount, inclusive.
        count: u32,
    },
    /// The work site is planned to last at least `months` months.
    SiteDurationAtLeast {
        /// Minimum duration in months, inclusive.
        months: u32,
    },
    /// The workplace chemical inventory is non-empty.
    HasChemicalInventory,
    /// The extracted risk level is at least `level`.
    RiskLevelAtLeast {
        /// Minimum risk level, inclusive.
        level: RiskLevel,
    },
    /// Every sub-condition holds. `AllOf([])` is true.
    AllOf {
        /// Conjoined sub-conditions.
        conditions: Vec<Condition>,
    },
    /// At least one sub-condition holds. `AnyOf([])` is false.
    AnyOf {
        /// Disjoined sub-conditions.
        conditions: Vec<Condition>,
    },
    /// The sub-condition does not hold.
    Not {
        /// Negated sub-condition.
        condition: Box<Condition>,
    },
    /// A named predicate from the [`PredicateRegistry`].
    Custom {
        /// Registered predicate name.
        name: String,
    },
}

impl Condition {
    /// Convenience constructor for a conjunction.
    pub fn all_of(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::AllOf {
            conditions: conditions.into_iter().collect(),
        }
    }

    /// Convenience constructor for a disjunction.
    pub fn any_of(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::AnyOf {
            conditions: conditions.into_iter().collect(),
        }
    }

    /// Evaluate this condition against a context.
    ///
    /// Pure: neither the context nor the registry is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError`] if a `Custom` predicate is unknown or
    /// reports a failure. Compound conditions propagate the first failure.
    pub fn eval(
        &self,
        ctx: &EvaluationContext,
        predicates: &PredicateRegistry,
    ) -> Result<bool, ConditionError> {
        match self {
            Self::KeywordPresent { keyword } => Ok(ctx.has_keyword(keyword)),
            Self::AnyKeywordOf { keywords } => {
                Ok(keywords.iter().any(|k| ctx.has_keyword(k)))
            }
            Self::SubstanceDetected { substance } => Ok(ctx.has_substance(substance)),
            Self::SectorIs { sector } => Ok(ctx.sector.eq_ignore_ascii_case(sector)),
            Self::EmployeeCountAtLeast { count } => Ok(ctx.employee_count >= *count),
            Self::SiteDurationAtLeast { months } => Ok(ctx.duration_months >= *months),
            Self::HasChemicalInventory => Ok(!ctx.chemical_inventory.is_empty()),
            Self::RiskLevelAtLeast { level } => Ok(ctx.risk_level >= *level),
            Self::AllOf { conditions } => {
                for condition in conditions {
                    if !condition.eval(ctx, predicates)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::AnyOf { conditions } => {
                for condition in conditions {
                    if condition.eval(ctx, predicates)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Not { condition } => Ok(!condition.eval(ctx, predicates)?),
            Self::Custom { name } => {
                let predicate = predicates.get(name).ok_or_else(|| {
                    ConditionError::UnknownPredicate { name: name.clone() }
                })?;
                (predicate.as_ref())(ctx).map_err(|reason| ConditionError::PredicateFailed {
                    name: name.clone(),
                    reason,
                })
            }
        }
    }
}

/// Signature of a registered custom predicate.
///
/// Predicates are pure: they read the context and return a verdict or a
/// failure reason. They must not capture mutable state.
pub type PredicateFn = dyn Fn(&EvaluationContext) -> Result<bool, String> + Send + Sync;

/// Explicit lookup table of named custom predicates.
///
/// Keyed by a `BTreeMap` so listing is deterministic. The registry is
/// immutable once handed to the engine; registration happens up front.
#[derive(Clone, Default)]
pub struct PredicateRegistry {
    predicates: BTreeMap<String, Arc<PredicateFn>>,
}

impl PredicateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate under a name. Replaces any existing entry.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&EvaluationContext) -> Result<bool, String> + Send + Sync + 'static,
    {
        self.predicates.insert(name.into(), Arc::new(predicate));
    }

    /// Look up a predicate by name.
    pub fn get(&self, name: &str) -> Option<&Arc<PredicateFn>> {
        self.predicates.get(name)
    }

    /// Registered predicate names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(String::as_str)
    }

    /// Number of registered predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl std::fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateRegistry")
            .field("names", &self.predicates.keys().collect::<Vec<_>>())
            .finish()
    }
}
