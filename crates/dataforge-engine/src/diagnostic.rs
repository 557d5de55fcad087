//! # Quick LMRSST Diagnostic
//!
//! A lightweight self-assessment over five declared facts, independent of
//! the document pipeline: prevention program, incident register, training
//! age, and participation mechanisms, each checked against its LMRSST
//! article.
//!
//! The reference date is an explicit parameter so the diagnostic is a pure
//! function (training age is computed in calendar years, matching the
//! original assessment behavior).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Declared facts for a quick diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticInput {
    /// Number of employees.
    pub employee_count: u32,
    /// Whether an incident/accident register is kept up to date.
    pub incident_register: bool,
    /// Date of the last SST training.
    pub last_training: NaiveDate,
    /// Whether a prevention program is in place.
    pub prevention_program: bool,
    /// Sector tag.
    pub sector: String,
}

/// One diagnostic finding (non-conformity or recommendation) with its
/// LMRSST article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticFinding {
    /// The finding text.
    pub message: String,
    /// LMRSST article backing the finding.
    pub article: String,
}

impl DiagnosticFinding {
    fn new(message: &str, article: &str) -> Self {
        Self {
            message: message.to_string(),
            article: article.to_string(),
        }
    }
}

/// Outcome of a quick diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Sector tag echoed from the input.
    pub sector: String,
    /// Employee count echoed from the input.
    pub employee_count: u32,
    /// Whether no non-conformity was found.
    pub overall_compliant: bool,
    /// Detected non-conformities.
    pub non_conformities: Vec<DiagnosticFinding>,
    /// Recommendations, including preventive ones.
    pub recommendations: Vec<DiagnosticFinding>,
}

/// Run the quick LMRSST diagnostic as of the given reference date.
pub fn lmrsst_diagnostic(input: &DiagnosticInput, as_of: NaiveDate) -> DiagnosticReport {
    use chrono::Datelike;

    let mut non_conformities = Vec::new();
    let mut recommendations = Vec::new();

    // 1. Prevention program or action plan, by establishment size.
    if input.employee_count >= 20 && !input.prevention_program {
        non_conformities.push(DiagnosticFinding::new(
            "Absence de programme de prévention requis (≥ 20 employés)",
            "LMRSST 90",
        ));
        recommendations.push(DiagnosticFinding::new(
            "Vous devez mettre en place un programme de prévention.",
            "LMRSST 90",
        ));
    }
    if input.employee_count < 20 && !input.prevention_program {
        recommendations.push(DiagnosticFinding::new(
            "Un plan d'action est recommandé pour les entreprises de moins de 20 employés.",
            "LMRSST 64",
        ));
    }

    // 2. Incident register.
    if !input.incident_register {
        non_conformities.push(DiagnosticFinding::new(
            "Registre des incidents manquant ou incomplet",
            "LMRSST 123",
        ));
        recommendations.push(DiagnosticFinding::new(
            "Vous devez tenir à jour un registre des incidents et accidents.",
            "LMRSST 123",
        ));
    }

    // 3. SST training freshness (calendar-year difference).
    let years_since_training = as_of.year() - input.last_training.year();
    if years_since_training > 3 {
        non_conformities.push(DiagnosticFinding::new(
            "Formation SST périmée (> 3 ans)",
            "LMRSST 27",
        ));
        recommendations.push(DiagnosticFinding::new(
            "La formation SST doit être renouvelée tous les 3 ans.",
            "LMRSST 27",
        ));
    }

    // 4. Participation mechanism, by establishment size.
    if input.employee_count >= 20 {
        recommendations.push(DiagnosticFinding::new(
            "Vous devez mettre en place un Comité de santé et sécurité (CoSS).",
            "LMRSST 101",
        ));
    } else {
        recommendations.push(DiagnosticFinding::new(
            "Un agent de liaison en SST (ALSS) doit être désigné.",
            "LMRSST 101",
        ));
    }

    DiagnosticReport {
        sector: input.sector.clone(),
        employee_count: input.employee_count,
        overall_compliant: non_conformities.is_empty(),
        non_conformities,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn compliant_input() -> DiagnosticInput {
        DiagnosticInput {
            employee_count: 25,
            incident_register: true,
            last_training: date(2025, 1, 15),
            prevention_program: true,
            sector: "construction".into(),
        }
    }

    #[test]
    fn compliant_establishment_has_no_non_conformities() {
        let report = lmrsst_diagnostic(&compliant_input(), date(2026, 8, 6));
        assert!(report.overall_compliant);
        assert!(report.non_conformities.is_empty());
        // The participation recommendation is always present.
        assert!(report
            .recommendations
            .iter()
            .any(|f| f.article == "LMRSST 101"));
    }

    #[test]
    fn missing_prevention_program_over_20_employees() {
        let mut input = compliant_input();
        input.prevention_program = false;
        let report = lmrsst_diagnostic(&input, date(2026, 8, 6));
        assert!(!report.overall_compliant);
        assert!(report
            .non_conformities
            .iter()
            .any(|f| f.article == "LMRSST 90"));
    }

    #[test]
    fn small_establishment_gets_action_plan_recommendation_only() {
        let mut input = compliant_input();
        input.employee_count = 12;
        input.prevention_program = false;
        let report = lmrsst_diagnostic(&input, date(2026, 8, 6));
        assert!(report.overall_compliant);
        assert!(report
            .recommendations
            .iter()
            .any(|f| f.article == "LMRSST 64"));
        // The liaison agent is recommended below 20 employees.
        assert!(report
            .recommendations
            .iter()
            .any(|f| f.message.contains("ALSS")));
    }

    #[test]
    fn missing_incident_register_is_a_non_conformity() {
        let mut input = compliant_input();
        input.incident_register = false;
        let report = lmrsst_diagnostic(&input, date(2026, 8, 6));
        assert!(report
            .non_conformities
            .iter()
            .any(|f| f.article == "LMRSST 123"));
    }

    #[test]
    fn stale_training_is_a_non_conformity() {
        let mut input = compliant_input();
        input.last_training = date(2022, 6, 1);
        let report = lmrsst_diagnostic(&input, date(2026, 8, 6));
        assert!(report
            .non_conformities
            .iter()
            .any(|f| f.article == "LMRSST 27"));
    }

    #[test]
    fn training_age_uses_calendar_years() {
        let mut input = compliant_input();
        // 2023 to 2026 is exactly 3 calendar years: not stale.
        input.last_training = date(2023, 12, 31);
        let report = lmrsst_diagnostic(&input, date(2026, 1, 1));
        assert!(report
            .non_conformities
            .iter()
            .all(|f| f.article != "LMRSST 27"));
    }

    #[test]
    fn diagnostic_is_deterministic() {
        let input = compliant_input();
        let as_of = date(2026, 8, 6);
        let first = lmrsst_diagnostic(&input, as_of);
        let second = lmrsst_diagnostic(&input, as_of);
        assert_eq!(first.non_conformities, second.non_conformities);
        assert_eq!(first.recommendations, second.recommendations);
    }

    #[test]
    fn report_serde_roundtrip() {
        let report = lmrsst_diagnostic(&compliant_input(), date(2026, 8, 6));
        let json = serde_json::to_string(&report).unwrap();
        let parsed: DiagnosticReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.overall_compliant, report.overall_compliant);
        assert_eq!(parsed.recommendations, report.recommendations);
    }
}
