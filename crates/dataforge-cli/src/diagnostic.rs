//! # `dataforge diagnostic` — Quick LMRSST Self-Assessment
//!
//! Runs the five-point diagnostic from declared facts and prints the
//! report as JSON.

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Args;

use dataforge_engine::{lmrsst_diagnostic, DiagnosticInput};

/// Arguments for `dataforge diagnostic`.
#[derive(Args, Debug)]
pub struct DiagnosticArgs {
    /// Number of employees.
    #[arg(long)]
    pub employees: u32,

    /// Sector tag of the organization.
    #[arg(long, default_value = "general")]
    pub sector: String,

    /// An incident/accident register is kept up to date.
    #[arg(long)]
    pub incident_register: bool,

    /// A prevention program is in place.
    #[arg(long)]
    pub prevention_program: bool,

    /// Date of the last SST training (YYYY-MM-DD).
    #[arg(long)]
    pub last_training: String,

    /// Reference date for the assessment (defaults to today, UTC).
    #[arg(long)]
    pub as_of: Option<String>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the diagnostic and print the report to stdout.
pub fn run(args: DiagnosticArgs) -> anyhow::Result<()> {
    let last_training = NaiveDate::parse_from_str(&args.last_training, "%Y-%m-%d")
        .with_context(|| format!("parsing --last-training {:?}", args.last_training))?;
    let as_of = match &args.as_of {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("parsing --as-of {raw:?}"))?,
        None => Utc::now().date_naive(),
    };

    let input = DiagnosticInput {
        employee_count: args.employees,
        incident_register: args.incident_register,
        last_training,
        prevention_program: args.prevention_program,
        sector: args.sector.clone(),
    };
    let report = lmrsst_diagnostic(&input, as_of);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");
    Ok(())
}
