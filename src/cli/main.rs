//! Logo background removal CLI
//!
//! Command-line interface around [`BackgroundRemover`].

use super::config::CliConfigBuilder;
use crate::{
    processor::BackgroundRemover,
    tracing_config::{init_cli_tracing, spans},
    types::{FillStats, ProcessingTimings, RemovalResult},
};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Make the border-connected background of a logo transparent
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "logo-bgremove")]
pub struct Cli {
    /// Input image (any format the decoder understands)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output image; the extension selects the format (png, webp, tif/tiff)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Enable verbose logging (-v: DEBUG, -vv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the status lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Create missing parent directories of OUTPUT
    #[arg(long)]
    pub create_dirs: bool,

    /// Print fill statistics and timings as JSON on stdout
    #[arg(long)]
    pub stats_json: bool,

    /// Tracing filter directive, overrides -v (e.g. "logo_bgremove=trace")
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

/// Machine-readable summary of one run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub transparent_pixels: usize,
    pub stats: FillStats,
    pub timings: ProcessingTimings,
}

impl RunSummary {
    #[must_use]
    pub fn new(input: &Path, output: &Path, result: &RemovalResult) -> Self {
        let (width, height) = result.dimensions();
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            width,
            height,
            transparent_pixels: result.transparent_pixel_count(),
            stats: result.stats,
            timings: result.timings.clone(),
        }
    }
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    let session_id = init_cli_tracing(cli.verbose, cli.log_filter.as_deref())
        .context("Failed to initialize tracing")?;
    let _session = spans::session(&session_id).entered();

    CliConfigBuilder::validate_cli(&cli).context("Invalid CLI arguments")?;
    let config = CliConfigBuilder::from_cli(&cli).context("Failed to build configuration")?;
    debug!(?config, "Configuration resolved");

    let mut remover =
        BackgroundRemover::new(config).context("Failed to create background remover")?;
    let result = remover
        .process_file(&cli.input, &cli.output)
        .with_context(|| format!("Failed to remove background from {}", cli.input.display()))?;

    info!(
        cleared = result.stats.cleared_pixels,
        total_ms = result.timings.total_ms,
        "Done"
    );

    if cli.stats_json {
        let summary = RunSummary::new(&cli.input, &cli.output, &result);
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize statistics")?
        );
    }

    Ok(())
}
