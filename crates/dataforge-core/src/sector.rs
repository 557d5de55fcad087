//! # Sector Scoping
//!
//! Rules carry a sector scope: either a wildcard (the rule applies in every
//! sector) or an explicit list of sector tags. The scope is presentation
//! metadata carried through to obligations and scenarios — sector gating in
//! a rule's trigger logic is expressed in its condition, not here.

use serde::{Deserialize, Serialize};

/// The set of sectors a compliance rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorScope {
    /// The rule applies in every sector (the `"tous"` wildcard of the
    /// source corpus).
    All,
    /// The rule applies only in the listed sectors.
    Only(Vec<String>),
}

impl SectorScope {
    /// Build a scope from an explicit sector list.
    pub fn only<I, S>(sectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(sectors.into_iter().map(Into::into).collect())
    }

    /// Whether the scope covers the given sector tag.
    ///
    /// Comparison is ASCII-case-insensitive; an empty `Only` list covers
    /// nothing.
    pub fn applies_to(&self, sector: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(sectors) => sectors.iter().any(|s| s.eq_ignore_ascii_case(sector)),
        }
    }
}

impl std::fmt::Display for SectorScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("tous"),
            Self::Only(sectors) => f.write_str(&sectors.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_sector() {
        assert!(SectorScope::All.applies_to("construction"));
        assert!(SectorScope::All.applies_to("industrie"));
        assert!(SectorScope::All.applies_to(""));
    }

    #[test]
    fn only_covers_listed_sectors() {
        let scope = SectorScope::only(["construction", "industrie"]);
        assert!(scope.applies_to("construction"));
        assert!(scope.applies_to("Construction")); // case-insensitive
        assert!(!scope.applies_to("services"));
    }

    #[test]
    fn empty_only_covers_nothing() {
        let scope = SectorScope::Only(vec![]);
        assert!(!scope.applies_to("construction"));
    }

    #[test]
    fn display_wildcard() {
        assert_eq!(SectorScope::All.to_string(), "tous");
        assert_eq!(
            SectorScope::only(["construction"]).to_string(),
            "construction"
        );
    }

    #[test]
    fn serde_roundtrip() {
        for scope in [SectorScope::All, SectorScope::only(["construction"])] {
            let json = serde_json::to_string(&scope).unwrap();
            let parsed: SectorScope = serde_json::from_str(&json).unwrap();
            assert_eq!(scope, parsed);
        }
    }
}
