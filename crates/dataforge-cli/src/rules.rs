//! # `dataforge rules` — Rule Set Listing
//!
//! Prints the built-in LMRSST rule set with severities, sector scopes, and
//! citations, or as JSON with `--json`.

use clap::Args;

use dataforge_registry::{quebec_sst_corpus, LegalReferenceRegistry};
use dataforge_rules::lmrsst_rule_set;

/// Arguments for `dataforge rules`.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Emit the rule set as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Print the rule set to stdout.
pub fn run(args: RulesArgs) -> anyhow::Result<()> {
    let registry = LegalReferenceRegistry::new(quebec_sst_corpus())?;
    let rules = lmrsst_rule_set(&registry)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(rules.all())?);
        return Ok(());
    }

    for rule in rules.all() {
        println!(
            "{:<20} {:<9} [{}] {}",
            rule.id,
            rule.severity,
            rule.sectors,
            rule.legal_refs.join(", ")
        );
        for obligation in &rule.obligations {
            println!("    - {obligation}");
        }
    }
    Ok(())
}
