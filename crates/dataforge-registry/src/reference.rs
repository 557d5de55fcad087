//! # Legal Reference Records
//!
//! A `LegalReference` is one entry of the regulatory catalogue: a statute or
//! regulation with its citation code, title, publisher, last-update date and
//! canonical URL. Reference data is immutable — loaded once at engine
//! construction and never mutated.

use serde::{Deserialize, Serialize};

/// Kind of regulatory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// A statute (e.g., the LSST, S-2.1).
    Law,
    /// A regulation made under a statute (e.g., the RSST, S-2.1,r.13).
    Regulation,
}

impl ReferenceKind {
    /// Returns the snake_case string identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Law => "law",
            Self::Regulation => "regulation",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Law => "LOI",
            Self::Regulation => "REGLEMENT",
        };
        f.write_str(s)
    }
}

/// One entry of the legal corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReference {
    /// Citation code, unique within a registry (e.g., `"S-2.1,r.13"`).
    pub code: String,
    /// Official title of the text.
    pub title: String,
    /// Whether this is a law or a regulation.
    pub kind: ReferenceKind,
    /// Publisher of the consolidated text (e.g., "Légis Québec").
    pub source: String,
    /// ISO date of the last consolidation consulted (e.g., `"2025-04-01"`).
    pub last_update: String,
    /// Canonical URL of the consolidated text.
    pub url: String,
}

impl LegalReference {
    /// Build a reference record.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        kind: ReferenceKind,
        source: impl Into<String>,
        last_update: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            kind,
            source: source.into(),
            last_update: last_update.into(),
            url: url.into(),
        }
    }
}

impl std::fmt::Display for LegalReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.title)
    }
}
