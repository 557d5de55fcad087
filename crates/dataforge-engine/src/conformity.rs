//! # Conformity Assessment and Non-Conformity Detection
//!
//! An obligation is considered satisfied when the document contains at
//! least one evidence term for its action type — a case-insensitive
//! substring check against a controlled vocabulary. This is a deliberate
//! heuristic, not a classifier; the vocabulary ships as replaceable
//! configuration data.
//!
//! Non-conformity records are derived from the obligations left
//! non-compliant, each with a recommended corrective action.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dataforge_core::{ActionId, ActionType, Severity};

use crate::obligation::Obligation;

/// A detected gap between an obligation and the document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonConformity {
    /// Fresh identifier for this record.
    pub id: ActionId,
    /// Representative legal citation of the unmet obligation.
    pub legal_reference: String,
    /// Severity inherited from the obligation.
    pub severity: Severity,
    /// What is missing.
    pub description: String,
    /// Suggested corrective action.
    pub recommended_action: String,
}

/// Evidence vocabulary: per action type, the terms whose presence in the
/// document counts as evidence the obligation is addressed.
///
/// Construction covers every [`ActionType`] exhaustively, so assessment is
/// total by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceVocabulary {
    terms: BTreeMap<ActionType, Vec<String>>,
}

impl EvidenceVocabulary {
    /// Build a vocabulary from an explicit table.
    ///
    /// Action types absent from the table are treated as having no evidence
    /// terms: their obligations always assess non-compliant.
    pub fn new(terms: BTreeMap<ActionType, Vec<String>>) -> Self {
        Self { terms }
    }

    /// The built-in French-language vocabulary for the LMRSST corpus.
    pub fn lmrsst() -> Self {
        let mut terms = BTreeMap::new();
        for action_type in ActionType::all() {
            // Exhaustive: adding an ActionType variant breaks this match.
            let entries: &[&str] = match action_type {
                ActionType::Formation => &["formation", "formé", "attestation de formation"],
                ActionType::Documentation => {
                    &["registre", "fiche de données", "fds", "procédure écrite"]
                }
                ActionType::EvaluationRisque => {
                    &["évaluation des risques", "analyse de risque", "inspection"]
                }
                ActionType::ConformiteLegale => &["conforme", "conformité", "étiquetage"],
                ActionType::ComiteSst => &["comité", "représentant"],
                ActionType::Surveillance => &["surveillance", "contrôle", "mesure d'exposition"],
                ActionType::Communication => &["affichage", "consigne", "numéros d'urgence"],
            };
            terms.insert(
                *action_type,
                entries.iter().map(|s| s.to_string()).collect(),
            );
        }
        Self { terms }
    }

    /// Evidence terms for an action type (empty when unconfigured).
    pub fn terms_for(&self, action_type: ActionType) -> &[String] {
        self.terms
            .get(&action_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the content shows evidence for the action type.
    fn has_evidence(&self, content_lower: &str, action_type: ActionType) -> bool {
        self.terms_for(action_type)
            .iter()
            .any(|term| content_lower.contains(&term.to_lowercase()))
    }
}

/// Settle every obligation's `is_compliant` flag against the document.
pub fn assess_conformity(
    content: &str,
    obligations: &mut [Obligation],
    vocabulary: &EvidenceVocabulary,
) {
    let content_lower = content.to_lowercase();
    for obligation in obligations {
        obligation.is_compliant = vocabulary.has_evidence(&content_lower, obligation.action_type);
    }
}

/// Suggested corrective action for an unmet obligation, by action type.
fn recommended_action(action_type: ActionType) -> &'static str {
    // Exhaustive: every action type has a recommendation.
    match action_type {
        ActionType::Formation => "Planifier et documenter la formation des travailleurs visés.",
        ActionType::Documentation => {
            "Mettre en place le registre ou la documentation exigée et la tenir à jour."
        }
        ActionType::EvaluationRisque => {
            "Réaliser l'évaluation des risques et consigner les résultats."
        }
        ActionType::ConformiteLegale => {
            "Corriger les éléments non conformes aux exigences réglementaires."
        }
        ActionType::ComiteSst => {
            "Mettre en place le mécanisme de participation requis (comité ou représentant)."
        }
        ActionType::Surveillance => {
            "Instaurer la surveillance ou les mesures de contrôle exigées."
        }
        ActionType::Communication => {
            "Afficher et diffuser l'information requise aux travailleurs."
        }
    }
}

/// One non-conformity record per non-compliant obligation.
pub fn detect_non_conformities(obligations: &[Obligation]) -> Vec<NonConformity> {
    obligations
        .iter()
        .filter(|o| !o.is_compliant)
        .map(|o| NonConformity {
            id: ActionId::new(),
            legal_reference: o.article.clone(),
            severity: o.severity,
            description: format!("{} : {}", o.theme, o.description),
            recommended_action: recommended_action(o.action_type).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obligation(action_type: ActionType, description: &str) -> Obligation {
        Obligation {
            article: "S-2.1,r.13".into(),
            theme: "Amiante".into(),
            description: description.into(),
            action_type,
            severity: Severity::High,
            estimated_duration: "2 semaines".into(),
            legal_refs: vec!["S-2.1,r.13".into()],
            is_compliant: false,
        }
    }

    #[test]
    fn evidence_marks_obligation_compliant() {
        let mut obligations = vec![obligation(ActionType::Documentation, "Tenue de registres")];
        assess_conformity(
            "Un registre des expositions est tenu à jour depuis 2023.",
            &mut obligations,
            &EvidenceVocabulary::lmrsst(),
        );
        assert!(obligations[0].is_compliant);
    }

    #[test]
    fn missing_evidence_leaves_obligation_non_compliant() {
        let mut obligations = vec![obligation(ActionType::Formation, "Formation SIMDUT")];
        assess_conformity(
            "Le chantier débute en mai.",
            &mut obligations,
            &EvidenceVocabulary::lmrsst(),
        );
        assert!(!obligations[0].is_compliant);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut obligations = vec![obligation(ActionType::Documentation, "Tenue de registres")];
        assess_conformity(
            "REGISTRE des incidents disponible au bureau.",
            &mut obligations,
            &EvidenceVocabulary::lmrsst(),
        );
        assert!(obligations[0].is_compliant);
    }

    #[test]
    fn vocabulary_covers_every_action_type() {
        let vocabulary = EvidenceVocabulary::lmrsst();
        for action_type in ActionType::all() {
            assert!(
                !vocabulary.terms_for(*action_type).is_empty(),
                "no evidence terms for {action_type}"
            );
        }
    }

    #[test]
    fn unconfigured_action_type_always_assesses_non_compliant() {
        let vocabulary = EvidenceVocabulary::new(BTreeMap::new());
        let mut obligations = vec![obligation(ActionType::Formation, "Formation SIMDUT")];
        assess_conformity("formation complétée", &mut obligations, &vocabulary);
        assert!(!obligations[0].is_compliant);
    }

    #[test]
    fn non_conformities_partition_on_compliance_flag() {
        let mut compliant = obligation(ActionType::Documentation, "Tenue de registres");
        compliant.is_compliant = true;
        let missing = obligation(ActionType::Formation, "Formation SIMDUT obligatoire");

        let records = detect_non_conformities(&[compliant, missing]);
        assert_eq!(records.len(), 1);
        assert!(records[0].description.contains("Formation SIMDUT"));
        assert_eq!(records[0].severity, Severity::High);
        assert!(!records[0].recommended_action.is_empty());
    }

    #[test]
    fn non_conformity_ids_are_fresh() {
        let missing = obligation(ActionType::Formation, "Formation SIMDUT obligatoire");
        let first = detect_non_conformities(std::slice::from_ref(&missing));
        let second = detect_non_conformities(std::slice::from_ref(&missing));
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn vocabulary_serde_roundtrip() {
        let vocabulary = EvidenceVocabulary::lmrsst();
        let json = serde_json::to_string(&vocabulary).unwrap();
        let parsed: EvidenceVocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.terms_for(ActionType::Formation),
            vocabulary.terms_for(ActionType::Formation)
        );
    }
}
