//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers flowing through an analysis. These
//! prevent identifier confusion — a `RuleId` cannot be passed where a
//! `DocumentId` is expected.
//!
//! `DocumentId` and `RuleId` wrap caller-supplied strings (the document id
//! is opaque and carried through to the result unchanged). `ScenarioId` and
//! `ActionId` are freshly generated per result.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of the analyzed document, supplied by the caller and
/// carried through to the result unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// Identifier of a compliance rule (e.g., `"amiante_detection"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleId(pub String);

/// Unique identifier of a generated scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioId(pub Uuid);

/// Unique identifier of an action-plan item or non-conformity record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub Uuid);

impl DocumentId {
    /// Wrap a caller-supplied document identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is blank (empty or whitespace-only).
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl RuleId {
    /// Wrap a rule identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ScenarioId {
    /// Generate a fresh random scenario identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionId {
    /// Generate a fresh random action identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "scenario:{}", self.0)
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "action:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_blank_detection() {
        assert!(DocumentId::new("").is_blank());
        assert!(DocumentId::new("   ").is_blank());
        assert!(!DocumentId::new("doc-001").is_blank());
    }

    #[test]
    fn document_id_display_is_verbatim() {
        assert_eq!(DocumentId::new("doc-001").to_string(), "doc-001");
    }

    #[test]
    fn scenario_ids_are_unique() {
        assert_ne!(ScenarioId::new(), ScenarioId::new());
    }

    #[test]
    fn scenario_display_has_prefix() {
        assert!(ScenarioId::new().to_string().starts_with("scenario:"));
        assert!(ActionId::new().to_string().starts_with("action:"));
    }

    #[test]
    fn rule_id_serde_roundtrip() {
        let id = RuleId::new("amiante_detection");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"amiante_detection\"");
        let parsed: RuleId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
