//! Configuration conversion utilities for CLI arguments

use crate::cli::main_impl::Cli;
use crate::{config::RemovalConfig, services::OutputFormatHandler};
use anyhow::{Context, Result};

/// Convert CLI arguments to a `RemovalConfig`
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    pub(crate) fn from_cli(cli: &Cli) -> Result<RemovalConfig> {
        RemovalConfig::builder()
            .report_progress(!cli.quiet)
            .create_output_dirs(cli.create_dirs)
            .build()
            .context("Invalid configuration")
    }

    /// Validate CLI arguments before touching the filesystem
    pub(crate) fn validate_cli(cli: &Cli) -> Result<()> {
        OutputFormatHandler::resolve(None, &cli.output)
            .with_context(|| format!("Unusable output path {}", cli.output.display()))?;

        if cli.input == cli.output {
            anyhow::bail!(
                "INPUT and OUTPUT are the same file ({}); refusing to overwrite the source",
                cli.input.display()
            );
        }

        Ok(())
    }
}
