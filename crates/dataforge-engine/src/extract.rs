//! # Context Extraction Seam
//!
//! Context extraction is the engine's only external collaborator: in
//! production it is a hosted model call, in tests a deterministic scanner.
//! The [`ContextExtractor`] trait is the seam; the engine awaits it under a
//! caller-supplied timeout and never retries (retry policy belongs to the
//! extractor or the caller).
//!
//! [`KeywordContextExtractor`] is the built-in deterministic implementation:
//! it scans the document text for a fixed keyword/substance vocabulary and
//! merges the hits into a caller-provided organization profile.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dataforge_core::{DocumentId, EvaluationContext, RiskLevel, Timestamp};

/// Extraction failure, surfaced to the caller as a failed analysis.
///
/// The engine does not guess a default context: without an extracted
/// context there is no result.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The extractor did not answer within the caller's timeout.
    #[error("context extraction timed out after {limit_ms} ms")]
    Timeout {
        /// The timeout that was exceeded, in milliseconds.
        limit_ms: u128,
    },

    /// The extractor reported a failure.
    #[error("context extraction failed: {0}")]
    Failed(String),
}

/// Metadata accompanying a document into an analysis.
///
/// Only `id` is required; it is opaque to the engine and carried through to
/// the result unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Opaque document identifier.
    pub id: DocumentId,
    /// Document type hint (e.g., "programme_prevention").
    pub document_type: Option<String>,
    /// Sector hint from the uploader.
    pub sector: Option<String>,
    /// Where the document came from (e.g., "user_upload").
    pub source: Option<String>,
    /// When the document was received.
    pub uploaded_at: Option<Timestamp>,
}

impl DocumentMetadata {
    /// Metadata with only the required identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(id),
            document_type: None,
            sector: None,
            source: None,
            uploaded_at: None,
        }
    }

    /// Set the sector hint.
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }
}

/// The context-extraction collaborator.
///
/// Contract: return within the caller's timeout or fail; never produce a
/// context that violates [`EvaluationContext`] invariants (the unsigned
/// counts make the "never negative" clause structural).
pub trait ContextExtractor {
    /// Build a normalized evaluation context from raw input.
    fn extract(
        &self,
        content: &str,
        metadata: &DocumentMetadata,
    ) -> impl std::future::Future<Output = Result<EvaluationContext, ExtractionError>> + Send;
}

/// Facts about the organization that a document scan cannot recover.
///
/// The hosted extractor infers these from the document; the deterministic
/// scanner takes them up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationProfile {
    /// Sector tag (falls back to the metadata sector hint, then "general").
    pub sector: Option<String>,
    /// SCIAN industry classification code.
    pub scian_code: Option<String>,
    /// Number of employees.
    pub employee_count: u32,
    /// Planned work-site duration in months.
    pub duration_months: u32,
    /// Declared workplace chemical inventory.
    pub chemical_inventory: Vec<String>,
    /// Declared risk level.
    pub risk_level: RiskLevel,
}

impl Default for OrganizationProfile {
    fn default() -> Self {
        Self {
            sector: None,
            scian_code: None,
            employee_count: 0,
            duration_months: 0,
            chemical_inventory: Vec::new(),
            risk_level: RiskLevel::Low,
        }
    }
}

/// Deterministic extractor: scans the document for a fixed vocabulary and
/// merges the hits into the organization profile.
///
/// The scan is case-insensitive substring matching over the built-in
/// keyword and substance lists. This is intentionally a heuristic stand-in
/// for the hosted extraction service, suitable for tests and offline use.
#[derive(Debug, Clone)]
pub struct KeywordContextExtractor {
    profile: OrganizationProfile,
    keywords: Vec<String>,
    substances: Vec<String>,
}

impl KeywordContextExtractor {
    /// Vocabulary of document keywords the scanner looks for.
    const KEYWORDS: &'static [&'static str] = &[
        "amiante",
        "silice",
        "simdut",
        "fds",
        "étiquetage",
        "chantier",
        "échafaudage",
        "excavation",
        "cadenassage",
        "espace clos",
    ];

    /// Vocabulary of hazardous substances the scanner looks for.
    const SUBSTANCES: &'static [&'static str] =
        &["asbestos", "amiante", "silice", "plomb", "benzène", "isocyanates"];

    /// Create a scanner for the given organization profile.
    pub fn new(profile: OrganizationProfile) -> Self {
        Self {
            profile,
            keywords: Self::KEYWORDS.iter().map(|s| s.to_string()).collect(),
            substances: Self::SUBSTANCES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the keyword vocabulary.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    fn scan(&self, content: &str, metadata: &DocumentMetadata) -> EvaluationContext {
        let haystack = content.to_lowercase();
        let found = |terms: &[String]| -> Vec<String> {
            terms
                .iter()
                .filter(|term| haystack.contains(&term.to_lowercase()))
                .cloned()
                .collect()
        };

        let sector = self
            .profile
            .sector
            .clone()
            .or_else(|| metadata.sector.clone())
            .unwrap_or_else(|| "general".to_string());

        let mut ctx = EvaluationContext::new(sector)
            .with_keywords(found(&self.keywords))
            .with_substances(found(&self.substances))
            .with_employee_count(self.profile.employee_count)
            .with_duration_months(self.profile.duration_months)
            .with_chemical_inventory(self.profile.chemical_inventory.clone())
            .with_risk_level(self.profile.risk_level);
        if let Some(code) = &self.profile.scian_code {
            ctx = ctx.with_scian_code(code.clone());
        }
        ctx
    }
}

impl ContextExtractor for KeywordContextExtractor {
    async fn extract(
        &self,
        content: &str,
        metadata: &DocumentMetadata,
    ) -> Result<EvaluationContext, ExtractionError> {
        Ok(self.scan(content, metadata))
    }
}
