//! Command implementations.

use std::fs;

use anyhow::Context;

use shorex_ingest::parse_confirmation;
use shorex_model::{CANONICAL_COLUMNS, column_aliases, metadata_aliases};

use crate::cli::ParseArgs;

pub fn run_parse(args: &ParseArgs) -> anyhow::Result<()> {
    let bytes = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let confirmation = parse_confirmation(&bytes)?;

    let value = if args.orders {
        serde_json::Value::Array(confirmation.order_batch()?)
    } else {
        serde_json::to_value(&confirmation)?
    };
    let rendered = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{rendered}");
    Ok(())
}

pub fn run_aliases() {
    println!("Required columns:");
    for canonical in CANONICAL_COLUMNS {
        println!("  {canonical}");
    }
    println!();
    println!("Column aliases (slug -> column):");
    for (alias, canonical) in column_aliases() {
        println!("  {alias} -> {canonical}");
    }
    println!();
    println!("Metadata aliases (slug -> field):");
    for (alias, canonical) in metadata_aliases() {
        println!("  {alias} -> {canonical}");
    }
}
