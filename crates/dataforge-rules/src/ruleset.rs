//! # Rule Sets
//!
//! A `RuleSet` is the fixed, declaration-ordered collection of rules an
//! engine evaluates. Construction validates the whole set against the legal
//! reference registry: a rule set that builds successfully has unique ids,
//! non-empty obligation lists, and only resolvable citations. Evaluation
//! code can then assume referential integrity without re-checking.

use dataforge_core::ConfigurationError;
use dataforge_registry::LegalReferenceRegistry;

use crate::rule::ComplianceRule;

/// Validated, declaration-ordered collection of compliance rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ComplianceRule>,
}

impl RuleSet {
    /// Build a rule set, validating every rule against the registry.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::BlankRuleId`] for a blank id.
    /// - [`ConfigurationError::DuplicateRuleId`] for a repeated id.
    /// - [`ConfigurationError::EmptyObligations`] for a rule with no
    ///   obligations.
    /// - [`ConfigurationError::NoLegalRefs`] for a rule citing nothing.
    /// - [`ConfigurationError::UnknownLegalReference`] for a citation the
    ///   registry cannot resolve.
    pub fn new(
        rules: Vec<ComplianceRule>,
        registry: &LegalReferenceRegistry,
    ) -> Result<Self, ConfigurationError> {
        let mut seen_ids = std::collections::BTreeSet::new();
        for rule in &rules {
            let id = rule.id.as_str();
            if id.trim().is_empty() {
                return Err(ConfigurationError::BlankRuleId);
            }
            if !seen_ids.insert(id) {
                return Err(ConfigurationError::DuplicateRuleId { id: id.to_string() });
            }
            if rule.obligations.is_empty() {
                return Err(ConfigurationError::EmptyObligations { id: id.to_string() });
            }
            if rule.legal_refs.is_empty() {
                return Err(ConfigurationError::NoLegalRefs { id: id.to_string() });
            }
            for code in &rule.legal_refs {
                if !registry.contains(code) {
                    return Err(ConfigurationError::UnknownLegalReference {
                        id: id.to_string(),
                        code: code.clone(),
                    });
                }
            }
        }
        Ok(Self { rules })
    }

    /// All rules in declaration order.
    pub fn all(&self) -> &[ComplianceRule] {
        &self.rules
    }

    /// Look up a rule by id.
    pub fn get(&self, id: &str) -> Option<&ComplianceRule> {
        self.rules.iter().find(|r| r.id.as_str() == id)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
