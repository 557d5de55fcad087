//! # `dataforge analyze` — Document Compliance Analysis
//!
//! Reads a document from disk, builds the deterministic keyword extractor
//! from the declared organization facts, runs the engine, and prints the
//! result as JSON.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;

use dataforge_core::RiskLevel;
use dataforge_engine::{
    ComplianceEngine, DocumentMetadata, KeywordContextExtractor, OrganizationProfile,
    ScoringWeights,
};

/// Arguments for `dataforge analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path of the document to analyze (plain text).
    #[arg(long)]
    pub document: PathBuf,

    /// Document identifier carried through to the result.
    /// Defaults to the file name.
    #[arg(long)]
    pub id: Option<String>,

    /// Sector tag of the organization.
    #[arg(long, default_value = "general")]
    pub sector: String,

    /// SCIAN industry classification code.
    #[arg(long)]
    pub scian: Option<String>,

    /// Number of employees.
    #[arg(long, default_value_t = 0)]
    pub employees: u32,

    /// Planned work-site duration in months.
    #[arg(long, default_value_t = 0)]
    pub duration_months: u32,

    /// Declared risk level (low, medium, high).
    #[arg(long, default_value = "low")]
    pub risk_level: RiskLevel,

    /// Chemical products in the workplace inventory (repeatable).
    #[arg(long = "chemical")]
    pub chemicals: Vec<String>,

    /// Optional YAML file overriding the scoring weights.
    #[arg(long)]
    pub weights: Option<PathBuf>,

    /// Extraction timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the analysis and print the result to stdout.
pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.document)
        .with_context(|| format!("reading document {}", args.document.display()))?;

    let document_id = args.id.clone().unwrap_or_else(|| {
        args.document
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    });

    let mut engine = ComplianceEngine::lmrsst()?;
    if let Some(path) = &args.weights {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading weights {}", path.display()))?;
        let weights: ScoringWeights =
            serde_yaml::from_str(&raw).with_context(|| "parsing scoring weights")?;
        engine = engine.with_weights(weights);
    }

    let profile = OrganizationProfile {
        sector: Some(args.sector.clone()),
        scian_code: args.scian.clone(),
        employee_count: args.employees,
        duration_months: args.duration_months,
        chemical_inventory: args.chemicals.clone(),
        risk_level: args.risk_level,
    };
    let extractor = KeywordContextExtractor::new(profile);
    let metadata = DocumentMetadata::new(document_id).with_sector(args.sector.clone());

    tracing::info!(document = %args.document.display(), "starting compliance analysis");
    let result = engine
        .analyze_document_compliance(
            &extractor,
            &content,
            &metadata,
            Duration::from_secs(args.timeout_secs),
        )
        .await?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");
    Ok(())
}
