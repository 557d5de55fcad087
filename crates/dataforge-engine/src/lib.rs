//! # dataforge-engine — Compliance Analysis Pipeline
//!
//! The top layer of the DataForge workspace: turns a document and its
//! metadata into a [`ComplianceAnalysisResult`] — triggered rules,
//! obligations with conformity status, a 0-100 conformity score, detected
//! non-conformities, a prioritized action plan, and remediation scenarios
//! routed to responsible capabilities.
//!
//! ## Pipeline
//!
//! ```text
//! content + metadata
//!      │
//!      ▼
//! ContextExtractor (async, caller-bounded timeout)
//!      │
//!      ▼
//! EvaluationContext ──▶ rule evaluation ──▶ triggered rules
//!                                               │
//!                                               ▼
//!                           obligations ──▶ conformity assessment
//!                                               │
//!                          ┌────────────────────┤
//!                          ▼                    ▼
//!                   conformity score     non-conformities
//!                          │                    │
//!                          └───────┬────────────┘
//!                                  ▼
//!                    action plan + scenarios ──▶ ComplianceAnalysisResult
//! ```
//!
//! Everything after extraction is synchronous pure computation over
//! immutable data; concurrent analyses share the engine freely.
//!
//! ## Crate Policy
//!
//! - Rule-level failures degrade gracefully: they surface as diagnostics
//!   inside a successful result, never as a failed call.
//! - Configuration and input errors fail the whole call with a typed error;
//!   a result and an error are never conflated.

pub mod conformity;
pub mod diagnostic;
pub mod engine;
pub mod extract;
pub mod obligation;
pub mod result;
pub mod scenario;
pub mod score;

pub use conformity::{EvidenceVocabulary, NonConformity};
pub use diagnostic::{lmrsst_diagnostic, DiagnosticFinding, DiagnosticInput, DiagnosticReport};
pub use engine::{AnalysisError, ComplianceEngine};
pub use extract::{
    ContextExtractor, DocumentMetadata, ExtractionError, KeywordContextExtractor,
    OrganizationProfile,
};
pub use obligation::{Obligation, ObligationCatalog, ObligationProfile};
pub use result::ComplianceAnalysisResult;
pub use scenario::{ActionItem, ActionPlan, CapabilityRouter, GeneratedScenario};
pub use score::ScoringWeights;

/// Version tag stamped on analysis results.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
