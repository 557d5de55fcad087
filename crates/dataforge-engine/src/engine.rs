//! # Compliance Engine — Top-Level Orchestration
//!
//! `ComplianceEngine` owns the immutable parts of an analysis (registry,
//! rule set, predicates, catalogue, vocabulary, weights, router) and runs
//! the linear pipeline: validate input → extract context (bounded by the
//! caller's timeout) → evaluate rules → generate and assess obligations →
//! score → plan → scenarios → assemble the result.
//!
//! ## Concurrency
//!
//! Everything the engine owns is read-only after construction; clone the
//! engine or share it behind `Arc` across concurrent analyses. Each call
//! builds its own context and result. Cancellation is by dropping the
//! future: partial work is discarded, nothing is written anywhere.
//!
//! ## Errors
//!
//! Invalid input and extraction failures abort the call with a typed
//! [`AnalysisError`]. Rule-level failures never do: they are carried as
//! diagnostics inside the successful result.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use dataforge_core::{ConfigurationError, EvaluationContext, InvalidInput, Timestamp};
use dataforge_registry::{quebec_sst_corpus, LegalReferenceRegistry};
use dataforge_rules::{evaluate, lmrsst_rule_set, PredicateRegistry, RuleSet};

use crate::conformity::{assess_conformity, detect_non_conformities, EvidenceVocabulary};
use crate::extract::{ContextExtractor, DocumentMetadata, ExtractionError};
use crate::obligation::{generate_obligations, ObligationCatalog};
use crate::result::ComplianceAnalysisResult;
use crate::scenario::{generate_action_plan, generate_contextual_scenarios, CapabilityRouter};
use crate::score::{compliance_score, ScoringWeights};
use crate::ENGINE_VERSION;

/// Why an analysis call failed.
///
/// Distinct from the result type by construction: a failed analysis carries
/// no partial result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input was rejected before any evaluation.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// The context extractor failed or timed out.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// The compliance analysis engine.
///
/// Built once from explicit configuration (no module-level singletons) and
/// shared across analyses.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    registry: Arc<LegalReferenceRegistry>,
    rules: Arc<RuleSet>,
    predicates: Arc<PredicateRegistry>,
    catalog: ObligationCatalog,
    vocabulary: EvidenceVocabulary,
    weights: ScoringWeights,
    router: CapabilityRouter,
}

impl ComplianceEngine {
    /// Assemble an engine from its parts.
    ///
    /// The rule set must have been validated against the same registry (its
    /// constructor enforces this), so no re-validation happens here.
    pub fn new(
        registry: Arc<LegalReferenceRegistry>,
        rules: RuleSet,
        predicates: PredicateRegistry,
        catalog: ObligationCatalog,
        vocabulary: EvidenceVocabulary,
        weights: ScoringWeights,
        router: CapabilityRouter,
    ) -> Self {
        Self {
            registry,
            rules: Arc::new(rules),
            predicates: Arc::new(predicates),
            catalog,
            vocabulary,
            weights,
            router,
        }
    }

    /// The engine for the built-in Québec LMRSST corpus and rule set, with
    /// default catalogue, vocabulary, weights, and routing.
    pub fn lmrsst() -> Result<Self, ConfigurationError> {
        let registry = Arc::new(LegalReferenceRegistry::new(quebec_sst_corpus())?);
        let rules = lmrsst_rule_set(&registry)?;
        Ok(Self::new(
            registry,
            rules,
            PredicateRegistry::new(),
            ObligationCatalog::lmrsst(),
            EvidenceVocabulary::lmrsst(),
            ScoringWeights::default(),
            CapabilityRouter::lmrsst(),
        ))
    }

    /// Replace the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the predicate registry.
    pub fn with_predicates(mut self, predicates: PredicateRegistry) -> Self {
        self.predicates = Arc::new(predicates);
        self
    }

    /// The legal reference registry backing this engine.
    pub fn registry(&self) -> &LegalReferenceRegistry {
        &self.registry
    }

    /// The rule set this engine evaluates.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Analyze a document end to end.
    ///
    /// The extractor call is bounded by `timeout`; the engine performs no
    /// retry of its own. Dropping the returned future cancels the analysis
    /// and discards all partial work.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidInput`] for empty content or a blank
    ///   document id (checked before extraction).
    /// - [`AnalysisError::Extraction`] when the extractor fails or exceeds
    ///   the timeout.
    pub async fn analyze_document_compliance<E>(
        &self,
        extractor: &E,
        content: &str,
        metadata: &DocumentMetadata,
        timeout: Duration,
    ) -> Result<ComplianceAnalysisResult, AnalysisError>
    where
        E: ContextExtractor + Sync,
    {
        if content.trim().is_empty() {
            return Err(InvalidInput::EmptyContent.into());
        }
        if metadata.id.is_blank() {
            return Err(InvalidInput::MissingDocumentId.into());
        }

        tracing::debug!(document_id = %metadata.id, "extracting evaluation context");
        let ctx = tokio::time::timeout(timeout, extractor.extract(content, metadata))
            .await
            .map_err(|_| ExtractionError::Timeout {
                limit_ms: timeout.as_millis(),
            })??;

        Ok(self.analyze_context(content, metadata, &ctx))
    }

    /// Run the pure pipeline over an already-extracted context.
    ///
    /// Exposed for callers that obtain contexts out of band (tests, batch
    /// re-evaluation). Deterministic up to generated identifiers and the
    /// validation timestamp.
    pub fn analyze_context(
        &self,
        content: &str,
        metadata: &DocumentMetadata,
        ctx: &EvaluationContext,
    ) -> ComplianceAnalysisResult {
        let outcome = evaluate(&self.rules, ctx, &self.predicates);
        tracing::debug!(
            document_id = %metadata.id,
            triggered = outcome.triggered.len(),
            skipped = outcome.diagnostics.len(),
            "rules evaluated"
        );

        let mut obligations = generate_obligations(&outcome.triggered, &self.catalog);
        assess_conformity(content, &mut obligations, &self.vocabulary);

        let non_conformities = detect_non_conformities(&obligations);
        let conformity_score = compliance_score(&self.weights, &obligations);
        let action_plan = generate_action_plan(&obligations, &self.router);
        let generated_scenarios =
            generate_contextual_scenarios(ctx, &obligations, &self.router);

        let mut legal_references: Vec<String> = outcome
            .triggered
            .iter()
            .flat_map(|rule| rule.legal_refs.iter().cloned())
            .collect();
        legal_references.sort();
        legal_references.dedup();

        let result = ComplianceAnalysisResult {
            document_id: metadata.id.clone(),
            conformity_score,
            triggered_rules: outcome.triggered_ids(),
            legal_references,
            non_conformities,
            obligations,
            action_plan,
            generated_scenarios,
            rule_diagnostics: outcome.diagnostics,
            validation_timestamp: Timestamp::now(),
            engine_version: ENGINE_VERSION.to_string(),
        };

        tracing::info!(
            document_id = %result.document_id,
            score = result.conformity_score,
            non_conformities = result.non_conformities.len(),
            "compliance analysis complete"
        );
        result
    }
}
