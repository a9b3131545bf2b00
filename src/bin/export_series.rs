use anyhow::{Context, Result};
use clap::Parser;
use defi_scope::config::{EXPORT, export_filename};
use defi_scope::{DailyTransactionStore, SeedPolicy, TimeRange};
use serde_json::json;
use std::path::PathBuf;

/// Writes the generated daily transaction table to JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file (defaults to the export directory and standard name)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Seed for a reproducible table
    #[arg(long)]
    seed: Option<u64>,

    /// 1m, 6m or 1y
    #[arg(long, default_value = "1y")]
    range: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let range = TimeRange::parse_loose(&args.range);

    // 2. Generate
    let store = DailyTransactionStore::new().with_noise(SeedPolicy::from_option(args.seed));
    let records = store.get(range);
    log::info!(
        "Generated {} days x {} chains ({})",
        records.len(),
        store.table().chains.len(),
        range
    );

    // 3. Serialize
    let output_path = args
        .out
        .unwrap_or_else(|| PathBuf::from(EXPORT.directory).join(export_filename(range)));
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }

    let document = json!({
        "version": EXPORT.version,
        "range": range,
        "seed": args.seed,
        "chains": store.table().chains,
        "records": records,
    });
    let body = serde_json::to_string_pretty(&document)?;
    tokio::fs::write(&output_path, body)
        .await
        .with_context(|| format!("Failed to write {:?}", output_path))?;

    log::info!("Wrote {:?}", output_path);
    Ok(())
}
