//! # Obligation Generation
//!
//! Converts triggered rules into concrete obligation records. One rule
//! yields one obligation per obligation description, each carrying the
//! rule's severity and its FULL legal-reference list (the representative
//! `article` is the first citation).
//!
//! Theme, action type, and estimated duration come from the
//! [`ObligationCatalog`] — configuration data keyed by obligation
//! description, with a mandatory default profile so generation is total.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dataforge_core::{ActionType, Severity};
use dataforge_rules::ComplianceRule;

/// A concrete regulatory obligation derived from a triggered rule.
///
/// `is_compliant` starts `false` and is settled by the conformity
/// assessment pass (`conformity.rs`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    /// Representative legal citation (first reference of the parent rule).
    pub article: String,
    /// Obligation theme (e.g., "Amiante").
    pub theme: String,
    /// Obligation description from the rule.
    pub description: String,
    /// Category used to route the obligation to a capability.
    pub action_type: ActionType,
    /// Severity inherited from the parent rule.
    pub severity: Severity,
    /// Rough effort estimate (e.g., "2 semaines").
    pub estimated_duration: String,
    /// Full citation list of the parent rule.
    pub legal_refs: Vec<String>,
    /// Whether the document shows evidence the obligation is satisfied.
    pub is_compliant: bool,
}

/// Catalogue metadata for one obligation description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationProfile {
    /// Obligation theme.
    pub theme: String,
    /// Routing category.
    pub action_type: ActionType,
    /// Rough effort estimate.
    pub estimated_duration: String,
}

impl ObligationProfile {
    fn new(theme: &str, action_type: ActionType, estimated_duration: &str) -> Self {
        Self {
            theme: theme.to_string(),
            action_type,
            estimated_duration: estimated_duration.to_string(),
        }
    }
}

/// Configuration table mapping obligation descriptions to their metadata.
///
/// Lookups never fail: descriptions absent from the table get the default
/// profile (and a debug log), so every triggered obligation is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObligationCatalog {
    profiles: BTreeMap<String, ObligationProfile>,
    default_profile: ObligationProfile,
}

impl ObligationCatalog {
    /// Build a catalogue from explicit entries and a default profile.
    pub fn new(
        profiles: BTreeMap<String, ObligationProfile>,
        default_profile: ObligationProfile,
    ) -> Self {
        Self {
            profiles,
            default_profile,
        }
    }

    /// The catalogue for the built-in LMRSST rule set.
    pub fn lmrsst() -> Self {
        let mut profiles = BTreeMap::new();
        let mut add = |description: &str, profile: ObligationProfile| {
            profiles.insert(description.to_string(), profile);
        };

        // amiante_detection
        add(
            "Évaluation des matériaux (RSST)",
            ObligationProfile::new("Amiante", ActionType::EvaluationRisque, "4 semaines"),
        );
        add(
            "Formation/information avant travaux",
            ObligationProfile::new("Amiante", ActionType::Formation, "2 semaines"),
        );
        add(
            "Méthodes de contrôle poussières",
            ObligationProfile::new("Amiante", ActionType::Surveillance, "3 semaines"),
        );
        add(
            "Tenue de registres",
            ObligationProfile::new("Amiante", ActionType::Documentation, "1 semaine"),
        );

        // chantier_seuils
        add(
            "Plan de circulation obligatoire",
            ObligationProfile::new("Chantier", ActionType::Documentation, "2 semaines"),
        );
        add(
            "Comité SST chantier (si ≥20 trav.)",
            ObligationProfile::new("Chantier", ActionType::ComiteSst, "4 semaines"),
        );
        add(
            "Représentant prévention",
            ObligationProfile::new("Chantier", ActionType::ComiteSst, "2 semaines"),
        );
        add(
            "Mécanismes de prévention",
            ObligationProfile::new("Chantier", ActionType::EvaluationRisque, "6 semaines"),
        );

        // produits_dangereux
        add(
            "Étiquetage conforme SIMDUT",
            ObligationProfile::new(
                "Produits dangereux",
                ActionType::ConformiteLegale,
                "2 semaines",
            ),
        );
        add(
            "FDS à jour et accessibles",
            ObligationProfile::new("Produits dangereux", ActionType::Documentation, "2 semaines"),
        );
        add(
            "Formation SIMDUT obligatoire",
            ObligationProfile::new("Produits dangereux", ActionType::Formation, "3 semaines"),
        );
        add(
            "Inventaire produits dangereux",
            ObligationProfile::new("Produits dangereux", ActionType::Documentation, "2 semaines"),
        );

        // secourisme
        add(
            "Secouristes formés selon effectif",
            ObligationProfile::new("Premiers secours", ActionType::Formation, "3 semaines"),
        );
        add(
            "Trousse premiers secours complète",
            ObligationProfile::new("Premiers secours", ActionType::Surveillance, "1 semaine"),
        );
        add(
            "Affichage numéros urgence",
            ObligationProfile::new("Premiers secours", ActionType::Communication, "1 semaine"),
        );
        add(
            "Registre interventions",
            ObligationProfile::new("Premiers secours", ActionType::Documentation, "1 semaine"),
        );

        Self::new(
            profiles,
            ObligationProfile::new(
                "Conformité générale",
                ActionType::ConformiteLegale,
                "2 semaines",
            ),
        )
    }

    /// Profile for an obligation description, falling back to the default.
    pub fn profile_for(&self, description: &str) -> &ObligationProfile {
        match self.profiles.get(description) {
            Some(profile) => profile,
            None => {
                tracing::debug!(description, "obligation not in catalogue, using default profile");
                &self.default_profile
            }
        }
    }

    /// Number of explicit catalogue entries.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalogue has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Generate one obligation per description of every triggered rule.
///
/// Obligations come out in rule declaration order, then description order,
/// all initially non-compliant (the conformity pass settles the flag).
pub fn generate_obligations(
    triggered: &[&ComplianceRule],
    catalog: &ObligationCatalog,
) -> Vec<Obligation> {
    let mut obligations = Vec::new();
    for rule in triggered {
        // RuleSet validation guarantees a first citation exists.
        let article = rule
            .legal_refs
            .first()
            .cloned()
            .unwrap_or_default();
        for description in &rule.obligations {
            let profile = catalog.profile_for(description);
            obligations.push(Obligation {
                article: article.clone(),
                theme: profile.theme.clone(),
                description: description.clone(),
                action_type: profile.action_type,
                severity: rule.severity,
                estimated_duration: profile.estimated_duration.clone(),
                legal_refs: rule.legal_refs.clone(),
                is_compliant: false,
            });
        }
    }
    obligations
}
