//! # Built-in LMRSST Rule Set
//!
//! The four rules of the Québec SST compliance engine:
//!
//! | Rule | Trigger | Severity |
//! |------|---------|----------|
//! | `amiante_detection` | asbestos keyword or substance | High |
//! | `chantier_seuils` | construction site, ≥20 workers or ≥3 months | Critical |
//! | `produits_dangereux` | chemical inventory or SIMDUT/FDS keywords | High |
//! | `secourisme` | ≥5 workers or high risk | Medium |
//!
//! Every citation below resolves in the built-in Québec corpus; the rule-set
//! constructor re-checks this at load time.

use dataforge_core::{ConfigurationError, RiskLevel, SectorScope, Severity};
use dataforge_registry::LegalReferenceRegistry;

use crate::condition::Condition;
use crate::rule::ComplianceRule;
use crate::ruleset::RuleSet;

/// Build the LMRSST rule set, validated against the given registry.
pub fn lmrsst_rule_set(
    registry: &LegalReferenceRegistry,
) -> Result<RuleSet, ConfigurationError> {
    RuleSet::new(
        vec![
            amiante_detection(),
            chantier_seuils(),
            produits_dangereux(),
            secourisme(),
        ],
        registry,
    )
}

/// Asbestos exposure: triggered by the `amiante` keyword or a detected
/// asbestos substance.
fn amiante_detection() -> ComplianceRule {
    ComplianceRule::new(
        "amiante_detection",
        Condition::any_of([
            Condition::KeywordPresent {
                keyword: "amiante".into(),
            },
            Condition::SubstanceDetected {
                substance: "asbestos".into(),
            },
        ]),
        Severity::High,
    )
    .with_obligations([
        "Évaluation des matériaux (RSST)",
        "Formation/information avant travaux",
        "Méthodes de contrôle poussières",
        "Tenue de registres",
    ])
    .with_legal_refs(["S-2.1,r.13", "S-2.1,r.4"])
    .with_sectors(SectorScope::only(["construction", "industrie"]))
}

/// Construction-site thresholds: a construction-sector site with at least
/// 20 workers or a planned duration of at least 3 months.
fn chantier_seuils() -> ComplianceRule {
    ComplianceRule::new(
        "chantier_seuils",
        Condition::all_of([
            Condition::SectorIs {
                sector: "construction".into(),
            },
            Condition::any_of([
                Condition::EmployeeCountAtLeast { count: 20 },
                Condition::SiteDurationAtLeast { months: 3 },
            ]),
        ]),
        Severity::Critical,
    )
    .with_obligations([
        "Plan de circulation obligatoire",
        "Comité SST chantier (si ≥20 trav.)",
        "Représentant prévention",
        "Mécanismes de prévention",
    ])
    .with_legal_refs(["S-2.1,r.4", "S-2.1,r.8.2", "S-2.1,r.5"])
    .with_sectors(SectorScope::only(["construction"]))
}

/// Hazardous products: a non-empty chemical inventory or SIMDUT-related
/// keywords in the document.
fn produits_dangereux() -> ComplianceRule {
    ComplianceRule::new(
        "produits_dangereux",
        Condition::any_of([
            Condition::HasChemicalInventory,
            Condition::AnyKeywordOf {
                keywords: vec!["SIMDUT".into(), "FDS".into(), "étiquetage".into()],
            },
        ]),
        Severity::High,
    )
    .with_obligations([
        "Étiquetage conforme SIMDUT",
        "FDS à jour et accessibles",
        "Formation SIMDUT obligatoire",
        "Inventaire produits dangereux",
    ])
    .with_legal_refs(["S-2.1,r.8.1"])
}

/// First aid: at least 5 workers, or any high-risk activity.
fn secourisme() -> ComplianceRule {
    ComplianceRule::new(
        "secourisme",
        Condition::any_of([
            Condition::EmployeeCountAtLeast { count: 5 },
            Condition::RiskLevelAtLeast {
                level: RiskLevel::High,
            },
        ]),
        Severity::Medium,
    )
    .with_obligations([
        "Secouristes formés selon effectif",
        "Trousse premiers secours complète",
        "Affichage numéros urgence",
        "Registre interventions",
    ])
    .with_legal_refs(["A-3.001,r.10"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataforge_registry::quebec_sst_corpus;

    fn registry() -> LegalReferenceRegistry {
        LegalReferenceRegistry::new(quebec_sst_corpus()).unwrap()
    }

    #[test]
    fn builtin_set_builds() {
        let set = lmrsst_rule_set(&registry()).unwrap();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn builtin_rule_ids() {
        let set = lmrsst_rule_set(&registry()).unwrap();
        for id in [
            "amiante_detection",
            "chantier_seuils",
            "produits_dangereux",
            "secourisme",
        ] {
            assert!(set.get(id).is_some(), "missing builtin rule: {id}");
        }
    }

    #[test]
    fn severities_match_corpus() {
        let set = lmrsst_rule_set(&registry()).unwrap();
        assert_eq!(set.get("chantier_seuils").unwrap().severity, Severity::Critical);
        assert_eq!(set.get("amiante_detection").unwrap().severity, Severity::High);
        assert_eq!(set.get("secourisme").unwrap().severity, Severity::Medium);
    }

    #[test]
    fn every_citation_resolves() {
        let registry = registry();
        let set = lmrsst_rule_set(&registry).unwrap();
        for rule in set.all() {
            for code in &rule.legal_refs {
                assert!(registry.contains(code), "unresolved citation: {code}");
            }
        }
    }

    #[test]
    fn hazardous_products_rule_is_sector_wide() {
        let set = lmrsst_rule_set(&registry()).unwrap();
        let rule = set.get("produits_dangereux").unwrap();
        assert!(rule.applies_to_sector("construction"));
        assert!(rule.applies_to_sector("services"));
    }
}
