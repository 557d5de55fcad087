//! # `dataforge corpus` — Legal Corpus Listing
//!
//! Prints the built-in Québec SST corpus, one reference per line, or as
//! JSON with `--json`.

use clap::Args;

use dataforge_registry::{quebec_sst_corpus, LegalReferenceRegistry};

/// Arguments for `dataforge corpus`.
#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Emit the corpus as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Print the corpus to stdout.
pub fn run(args: CorpusArgs) -> anyhow::Result<()> {
    let registry = LegalReferenceRegistry::new(quebec_sst_corpus())?;

    if args.json {
        let references: Vec<_> = registry.all().collect();
        println!("{}", serde_json::to_string_pretty(&references)?);
        return Ok(());
    }

    for reference in registry.all() {
        println!(
            "{:<14} {:<10} {:<12} {}",
            reference.code, reference.kind, reference.last_update, reference.title
        );
    }
    Ok(())
}
