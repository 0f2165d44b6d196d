//! Command implementations.
//!
//! `generate` runs the full pipeline over the given inputs; `regenerate`
//! only rebuilds the aggregate files from the components directory.

pub mod common;
pub mod generate;
pub mod regenerate;

use crate::cli::Cli;
use anyhow::Result;
use svgicon_core::cli::{ExitCode, OutputFormat};

/// Dispatches to the command selected by the arguments.
///
/// # Errors
///
/// Returns the error of the selected command.
pub async fn execute(cli: &Cli, output_format: OutputFormat) -> Result<ExitCode> {
    if cli.regenerate {
        regenerate::run(&cli.generator_config(), output_format).await
    } else {
        generate::run(cli, output_format).await
    }
}
