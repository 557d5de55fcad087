//! # Legal Reference Registry
//!
//! A read-only dictionary of legal references keyed by citation code.
//!
//! ## Invariants
//!
//! - Codes are unique: two entries with the same code are a
//!   [`ConfigurationError`] at construction, not a silent overwrite.
//! - No mutation after construction. The registry can be shared by reference
//!   across concurrent analyses.
//! - Iteration is deterministic (BTreeMap, sorted by code).

use std::collections::BTreeMap;

use dataforge_core::ConfigurationError;

use crate::reference::LegalReference;

/// Read-only registry of legal references, keyed by citation code.
#[derive(Debug, Clone)]
pub struct LegalReferenceRegistry {
    references: BTreeMap<String, LegalReference>,
}

impl LegalReferenceRegistry {
    /// Build a registry from a list of references.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateReferenceCode`] if two entries
    /// share a citation code.
    pub fn new(references: Vec<LegalReference>) -> Result<Self, ConfigurationError> {
        let mut map = BTreeMap::new();
        for reference in references {
            let code = reference.code.clone();
            if map.insert(code.clone(), reference).is_some() {
                return Err(ConfigurationError::DuplicateReferenceCode { code });
            }
        }
        Ok(Self { references: map })
    }

    /// Look up a reference by citation code.
    pub fn get(&self, code: &str) -> Option<&LegalReference> {
        self.references.get(code)
    }

    /// Whether the registry contains the given citation code.
    pub fn contains(&self, code: &str) -> bool {
        self.references.contains_key(code)
    }

    /// All references in sorted citation-code order.
    pub fn all(&self) -> impl Iterator<Item = &LegalReference> {
        self.references.values()
    }

    /// Number of catalogued references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}
