//! # Compliance Rules
//!
//! A `ComplianceRule` maps a trigger condition to the regulatory obligations
//! it entails, with the legal references backing them, a severity, and a
//! sector scope. Rules are immutable after construction; the rule set they
//! belong to is fixed per engine instance.

use serde::{Deserialize, Serialize};

use dataforge_core::{RuleId, SectorScope, Severity};

use crate::condition::Condition;

/// One condition-to-obligations mapping.
///
/// Built with [`ComplianceRule::new`] plus the `with_*` builders; structural
/// validation (non-empty obligations, resolvable legal references) happens
/// when the rule joins a [`RuleSet`](crate::ruleset::RuleSet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRule {
    /// Unique rule identifier (e.g., `"amiante_detection"`).
    pub id: RuleId,
    /// Trigger condition over the evaluation context.
    pub condition: Condition,
    /// Obligation descriptions entailed when the rule triggers, in
    /// declaration order.
    pub obligations: Vec<String>,
    /// Citation codes of the legal references backing the obligations.
    /// The first entry is the representative article for derived
    /// obligations; the full list is attached to each of them.
    pub legal_refs: Vec<String>,
    /// Severity of violating this rule.
    pub severity: Severity,
    /// Sectors the rule applies to.
    pub sectors: SectorScope,
}

impl ComplianceRule {
    /// Create a rule with the given id, condition, and severity.
    ///
    /// Obligations and legal references start empty and sector scope
    /// defaults to [`SectorScope::All`].
    pub fn new(id: impl Into<String>, condition: Condition, severity: Severity) -> Self {
        Self {
            id: RuleId::new(id),
            condition,
            obligations: Vec::new(),
            legal_refs: Vec::new(),
            severity,
            sectors: SectorScope::All,
        }
    }

    /// Set the obligation descriptions.
    pub fn with_obligations<I, S>(mut self, obligations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.obligations = obligations.into_iter().map(Into::into).collect();
        self
    }

    /// Set the cited legal references.
    pub fn with_legal_refs<I, S>(mut self, legal_refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legal_refs = legal_refs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sector scope.
    pub fn with_sectors(mut self, sectors: SectorScope) -> Self {
        self.sectors = sectors;
        self
    }

    /// Whether the rule's scope covers the given sector tag.
    pub fn applies_to_sector(&self, sector: &str) -> bool {
        self.sectors.applies_to(sector)
    }
}
