// Declare modules
pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod ignore_rules;
pub mod models;
pub mod paths;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;

use self::aggregator::aggregate;
use self::cli::Cli;
use self::config::resolve_config;

/// Parses arguments, resolves presets and runs one aggregation.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args)?;

    if !config.use_default_ignores && config.custom_ignore_patterns.is_empty() {
        log::warn!("💡 Tip: No ignore patterns active; dependency and build folders are included.");
    }

    // 3. Aggregate, forwarding progress lines to the logger
    let summary = aggregate(&config, |line| log::info!("{}", line)).with_context(|| {
        format!(
            "Failed to aggregate {} into {}",
            config.input_dir.display(),
            config.output_file.display()
        )
    })?;

    if summary.entries.is_empty() {
        log::warn!("⚠️ No files were included; the digest is empty.");
    }

    Ok(())
}
