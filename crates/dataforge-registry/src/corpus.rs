//! # Québec SST Corpus
//!
//! The built-in catalogue of Québec occupational health-and-safety texts the
//! engine cites. Dates reflect the consolidated versions consulted when the
//! corpus was assembled.
//!
//! Every citation code used by the built-in rule set and the quick LMRSST
//! diagnostic resolves here; the registry/rule-set cross-check depends on it.

use crate::reference::{LegalReference, ReferenceKind};

/// The built-in Québec SST corpus.
///
/// Codes follow the Légis Québec citation convention (`S-2.1,r.13` is
/// regulation 13 under statute S-2.1).
pub fn quebec_sst_corpus() -> Vec<LegalReference> {
    vec![
        LegalReference::new(
            "LMRSST",
            "Loi modernisant le régime de santé et de sécurité du travail",
            ReferenceKind::Law,
            "Légis Québec",
            "2025-04-01",
            "https://www.legisquebec.gouv.qc.ca/fr/document/lc/27",
        ),
        LegalReference::new(
            "S-2.1",
            "Loi sur la santé et la sécurité du travail",
            ReferenceKind::Law,
            "Légis Québec",
            "2025-04-01",
            "https://www.legisquebec.gouv.qc.ca/fr/ShowDoc/cs/S-2.1",
        ),
        LegalReference::new(
            "A-3.001",
            "Loi sur les accidents du travail et les maladies professionnelles",
            ReferenceKind::Law,
            "Légis Québec",
            "2025-04-01",
            "https://www.legisquebec.gouv.qc.ca/fr/showdoc/cs/A-3.001",
        ),
        LegalReference::new(
            "S-2.1,r.13",
            "RSST - Règlement sur la santé et la sécurité du travail",
            ReferenceKind::Regulation,
            "Légis Québec",
            "2025-04-01",
            "https://www.legisquebec.gouv.qc.ca/fr/document/rc/S-2.1%2C%20r.%2013%20/",
        ),
        LegalReference::new(
            "S-2.1,r.4",
            "Code de sécurité pour les travaux de construction",
            ReferenceKind::Regulation,
            "Légis Québec/ASP",
            "2025-02-20",
            "https://www.legisquebec.gouv.qc.ca/fr/ShowDoc/cr/S-2.1%2C%20r.%204",
        ),
        LegalReference::new(
            "S-2.1,r.5",
            "Règlement sur les comités de santé et de sécurité du travail",
            ReferenceKind::Regulation,
            "Légis Québec",
            "2025-04-01",
            "https://www.legisquebec.gouv.qc.ca/fr/ShowDoc/cr/S-2.1%2C%20r.%205",
        ),
        LegalReference::new(
            "S-2.1,r.8.1",
            "Règlement sur l'information concernant les produits dangereux",
            ReferenceKind::Regulation,
            "Légis Québec",
            "2025-04-01",
            "https://www.legisquebec.gouv.qc.ca/fr/ShowDoc/cr/S-2.1%2C%20r.%208.1",
        ),
        LegalReference::new(
            "S-2.1,r.8.2",
            "Règlement sur le représentant à la prévention dans un établissement",
            ReferenceKind::Regulation,
            "Légis Québec",
            "2025-04-01",
            "https://www.legisquebec.gouv.qc.ca/fr/ShowDoc/cr/S-2.1%2C%20r.%208.2",
        ),
        LegalReference::new(
            "S-2.1,r.14",
            "Règlement sur la santé et la sécurité du travail dans les mines",
            ReferenceKind::Regulation,
            "Légis Québec",
            "2025-04-01",
            "https://www.legisquebec.gouv.qc.ca/fr/ShowDoc/cr/S-2.1%2C%20r.%2014",
        ),
        LegalReference::new(
            "A-3.001,r.10",
            "Règlement sur les normes minimales de premiers secours et de premiers soins",
            ReferenceKind::Regulation,
            "Légis Québec",
            "2025-04-01",
            "https://www.legisquebec.gouv.qc.ca/fr/ShowDoc/cr/A-3.001%2C%20r.%2010",
        ),
    ]
}
