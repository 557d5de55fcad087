//! # Evaluation Context
//!
//! The normalized description of an organization and a document that every
//! rule condition is evaluated against. Built fresh for each analysis by a
//! context extractor; read-only from the rule evaluator's point of view.
//!
//! ## Invariant
//!
//! Rule evaluation is a pure function of `(RuleSet, EvaluationContext)`.
//! Nothing in this type is mutated during evaluation, so re-running the same
//! analysis over the same context yields an identical result.

use serde::{Deserialize, Serialize};

use crate::severity::RiskLevel;

/// Normalized evaluation context for one compliance analysis.
///
/// `employee_count` and `duration_months` are unsigned: the extractor
/// contract "never negative" is enforced by the type, not by a runtime
/// check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Keywords extracted from the document text.
    pub keywords: Vec<String>,
    /// Hazardous substances detected in the document.
    pub detected_substances: Vec<String>,
    /// Sector tag of the organization (e.g., "construction").
    pub sector: String,
    /// SCIAN industry classification code, when known.
    pub scian_code: Option<String>,
    /// Number of employees.
    pub employee_count: u32,
    /// Planned duration of the work site, in months.
    pub duration_months: u32,
    /// Chemical products present in the workplace inventory.
    pub chemical_inventory: Vec<String>,
    /// Overall risk level of the activity.
    pub risk_level: RiskLevel,
}

impl EvaluationContext {
    /// Create an empty context for the given sector.
    pub fn new(sector: impl Into<String>) -> Self {
        Self {
            keywords: Vec::new(),
            detected_substances: Vec::new(),
            sector: sector.into(),
            scian_code: None,
            employee_count: 0,
            duration_months: 0,
            chemical_inventory: Vec::new(),
            risk_level: RiskLevel::Low,
        }
    }

    /// Set the extracted keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the detected substances.
    pub fn with_substances<I, S>(mut self, substances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.detected_substances = substances.into_iter().map(Into::into).collect();
        self
    }

    /// Set the employee count.
    pub fn with_employee_count(mut self, count: u32) -> Self {
        self.employee_count = count;
        self
    }

    /// Set the work-site duration in months.
    pub fn with_duration_months(mut self, months: u32) -> Self {
        self.duration_months = months;
        self
    }

    /// Set the chemical inventory.
    pub fn with_chemical_inventory<I, S>(mut self, inventory: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chemical_inventory = inventory.into_iter().map(Into::into).collect();
        self
    }

    /// Set the risk level.
    pub fn with_risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = level;
        self
    }

    /// Set the SCIAN industry classification code.
    pub fn with_scian_code(mut self, code: impl Into<String>) -> Self {
        self.scian_code = Some(code.into());
        self
    }

    /// Whether the given keyword was extracted (case-insensitive).
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword))
    }

    /// Whether the given substance was detected (case-insensitive).
    pub fn has_substance(&self, substance: &str) -> bool {
        self.detected_substances
            .iter()
            .any(|s| s.eq_ignore_ascii_case(substance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_empty() {
        let ctx = EvaluationContext::new("construction");
        assert_eq!(ctx.sector, "construction");
        assert_eq!(ctx.employee_count, 0);
        assert_eq!(ctx.duration_months, 0);
        assert!(ctx.keywords.is_empty());
        assert!(ctx.chemical_inventory.is_empty());
        assert_eq!(ctx.risk_level, RiskLevel::Low);
        assert!(ctx.scian_code.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let ctx = EvaluationContext::new("industrie")
            .with_keywords(["amiante"])
            .with_substances(["asbestos"])
            .with_employee_count(25)
            .with_duration_months(4)
            .with_chemical_inventory(["toluène"])
            .with_risk_level(RiskLevel::High)
            .with_scian_code("2362");

        assert!(ctx.has_keyword("amiante"));
        assert!(ctx.has_substance("asbestos"));
        assert_eq!(ctx.employee_count, 25);
        assert_eq!(ctx.duration_months, 4);
        assert_eq!(ctx.chemical_inventory, vec!["toluène"]);
        assert_eq!(ctx.risk_level, RiskLevel::High);
        assert_eq!(ctx.scian_code.as_deref(), Some("2362"));
    }

    #[test]
    fn keyword_lookup_is_case_insensitive() {
        let ctx = EvaluationContext::new("construction").with_keywords(["SIMDUT"]);
        assert!(ctx.has_keyword("simdut"));
        assert!(!ctx.has_keyword("fds"));
    }

    #[test]
    fn serde_roundtrip() {
        let ctx = EvaluationContext::new("construction")
            .with_keywords(["amiante"])
            .with_employee_count(20);
        let json = serde_json::to_string(&ctx).unwrap();
        let parsed: EvaluationContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, parsed);
    }

    #[test]
    fn negative_employee_count_is_rejected_by_serde() {
        let err = serde_json::from_str::<EvaluationContext>(
            r#"{"keywords":[],"detected_substances":[],"sector":"x","scian_code":null,
                "employee_count":-1,"duration_months":0,"chemical_inventory":[],
                "risk_level":"low"}"#,
        );
        assert!(err.is_err());
    }
}
