//! # dataforge CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// DataForge compliance engine for the Québec SST regime.
///
/// Analyzes documents against the LMRSST rule set, runs quick diagnostics,
/// and inspects the legal corpus and rules.
#[derive(Parser, Debug)]
#[command(name = "dataforge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Analyze a document's compliance.
    Analyze(dataforge_cli::analyze::AnalyzeArgs),
    /// Run the quick LMRSST diagnostic.
    Diagnostic(dataforge_cli::diagnostic::DiagnosticArgs),
    /// List the legal reference corpus.
    Corpus(dataforge_cli::corpus::CorpusArgs),
    /// List the built-in rule set.
    Rules(dataforge_cli::rules::RulesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => dataforge_cli::analyze::run(args).await,
        Commands::Diagnostic(args) => dataforge_cli::diagnostic::run(args),
        Commands::Corpus(args) => dataforge_cli::corpus::run(args),
        Commands::Rules(args) => dataforge_cli::rules::run(args),
    }
}
