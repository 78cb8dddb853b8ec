//! hub-du - Main entry point

use anyhow::Result;
use clap::Parser;
use hub_du::{SizeFormat, build_snapshot, format_size, resolve_cache_root};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hub-du")]
#[command(about = "Disk usage inventory for the local HuggingFace model cache", long_about = None)]
#[command(version)]
struct Cli {
    /// Cache directory to scan (defaults to the HuggingFace hub cache)
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Only report models published by this organization
    #[arg(long)]
    org: Option<String>,

    /// Size format (auto or gb)
    #[arg(long, default_value = "auto")]
    format: String,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log format (json or pretty)
    #[arg(long, default_value = "pretty")]
    log_format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    match cli.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(&cli.log_level)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(&cli.log_level)
                .init();
        }
    }

    let format = match cli.format.as_str() {
        "gb" => SizeFormat::FixedGb,
        _ => SizeFormat::MultiUnit,
    };

    let cache_root = resolve_cache_root(cli.cache_dir);
    tracing::info!(cache_root = %cache_root.display(), "Scanning model cache");

    let snapshot = build_snapshot(&cache_root)?;
    let snapshot = match cli.org {
        Some(ref org) => snapshot.filter_by_organization(org),
        None => snapshot,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot.report(format))?);
        return Ok(());
    }

    println!("Model cache directory: {}", cache_root.display());
    println!();
    println!("Models by organization:");
    println!("=======================");

    for org in &snapshot.organizations {
        println!();
        println!(
            "{} ({}):",
            org.organization,
            format_size(org.total_bytes, format)
        );
        for record in &org.models {
            println!(
                "  - {} ({})",
                record.model,
                format_size(record.size_bytes, format)
            );
        }
    }

    println!();
    println!("Total: {}", snapshot.total_display(format));

    Ok(())
}
