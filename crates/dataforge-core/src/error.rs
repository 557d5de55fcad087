//! # Error Types — Load-Time and Input Errors
//!
//! Defines the fatal error categories of the engine. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Configuration errors are detected when the registry, rule set, or
//!   engine is constructed. They are fatal: a misconfigured engine is never
//!   built, so evaluation code can assume referential integrity.
//! - Input errors reject an analysis call before any rule is evaluated.
//!   No partial result is ever produced for invalid input.
//! - Per-rule evaluation failures are NOT here: a failing condition is
//!   isolated and recorded as a diagnostic inside a successful result, never
//!   surfaced as an error (see `dataforge-rules`).

use thiserror::Error;

/// Fatal configuration errors detected at construction time.
///
/// Any of these prevents the engine (or one of its parts) from being built.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Two legal references share the same citation code.
    #[error("duplicate legal reference code: {code:?}")]
    DuplicateReferenceCode {
        /// The duplicated citation code.
        code: String,
    },

    /// A rule was declared with a blank identifier.
    #[error("rule declared with a blank id")]
    BlankRuleId,

    /// Two rules share the same identifier.
    #[error("duplicate rule id: {id:?}")]
    DuplicateRuleId {
        /// The duplicated rule id.
        id: String,
    },

    /// A rule has an empty obligation list.
    #[error("rule {id:?} declares no obligations")]
    EmptyObligations {
        /// The offending rule id.
        id: String,
    },

    /// A rule cites no legal reference.
    #[error("rule {id:?} cites no legal reference")]
    NoLegalRefs {
        /// The offending rule id.
        id: String,
    },

    /// A rule cites a legal reference that is not in the registry.
    #[error("rule {id:?} cites unknown legal reference {code:?}")]
    UnknownLegalReference {
        /// The citing rule id.
        id: String,
        /// The unresolvable citation code.
        code: String,
    },

    /// The capability router was built with an empty default route.
    ///
    /// Every obligation must route to at least one capability, so the
    /// fallback route is mandatory.
    #[error("capability router default route is empty")]
    EmptyDefaultRoute,
}

/// Invalid analysis input, rejected before any rule evaluation begins.
#[derive(Error, Debug)]
pub enum InvalidInput {
    /// The document content is empty or whitespace-only.
    #[error("document content is empty")]
    EmptyContent,

    /// The document metadata carries a blank identifier.
    #[error("document metadata is missing an id")]
    MissingDocumentId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_reference_code_display() {
        let err = ConfigurationError::DuplicateReferenceCode {
            code: "S-2.1".to_string(),
        };
        assert!(format!("{err}").contains("S-2.1"));
    }

    #[test]
    fn unknown_legal_reference_display() {
        let err = ConfigurationError::UnknownLegalReference {
            id: "amiante_detection".to_string(),
            code: "S-2.1,r.99".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("amiante_detection"));
        assert!(msg.contains("S-2.1,r.99"));
    }

    #[test]
    fn empty_obligations_display() {
        let err = ConfigurationError::EmptyObligations {
            id: "secourisme".to_string(),
        };
        assert!(format!("{err}").contains("secourisme"));
    }

    #[test]
    fn invalid_input_display() {
        assert!(format!("{}", InvalidInput::EmptyContent).contains("empty"));
        assert!(format!("{}", InvalidInput::MissingDocumentId).contains("id"));
    }

    #[test]
    fn all_variants_are_debug() {
        let err = ConfigurationError::BlankRuleId;
        assert!(!format!("{err:?}").is_empty());
    }
}
