//! svgicon: SVG to Svelte icon component generator.
//!
//! Converts SVG files, directories, URLs, or inline markup into one Svelte
//! component per icon, plus a generated `SvgName.ts` type listing every icon
//! and an `SvgIcon.svelte` loader that renders an icon by name.
//!
//! # Examples
//!
//! ```bash
//! # Generate from a directory of SVGs
//! svgicon assets/icons
//!
//! # Mix files and URLs, overwrite without asking
//! svgicon logo.svg https://example.com/icons/star.svg --yes
//!
//! # Inline markup
//! svgicon --svg '<svg viewBox="0 0 24 24">...</svg>' --name check
//!
//! # Rebuild SvgName.ts and SvgIcon.svelte from existing components
//! svgicon --regenerate
//! ```

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use svgicon_cli::Cli;
use svgicon_cli::commands;
use svgicon_cli::commands::common::exit_code_for;
use svgicon_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments; clap exits with status 2 on usage errors
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    let exit_code = match cli.format.parse::<OutputFormat>() {
        Ok(output_format) => match commands::execute(&cli, output_format).await {
            Ok(code) => code,
            Err(err) => {
                eprintln!("{} {err:#}", "error:".red().bold());
                exit_code_for(&err)
            }
        },
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::INVALID_INPUT
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["svgicon", "--verbose", "icons"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_output_format_custom() {
        let cli = Cli::parse_from(["svgicon", "--format", "json", "icons"]);
        assert_eq!(cli.format.parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_cli_output_format_invalid() {
        let cli = Cli::parse_from(["svgicon", "--format", "yaml", "icons"]);
        assert!(cli.format.parse::<OutputFormat>().is_err());
    }
}
