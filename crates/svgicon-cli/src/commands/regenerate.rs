//! Regenerate command implementation.
//!
//! Rebuilds the type and loader artifacts from the components directory
//! alone, without resolving or rendering any source.

use super::common::{GenerationSummary, print_summary, write_aggregates};
use crate::scanner::scan_existing;
use anyhow::Result;
use svgicon_core::cli::{ExitCode, OutputFormat};
use svgicon_core::{GeneratorConfig, IconSet, Reporter, TracingReporter};

/// Runs the regenerate command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the aggregate files
/// cannot be written.
pub async fn run(config: &GeneratorConfig, output_format: OutputFormat) -> Result<ExitCode> {
    let summary = execute(config, &TracingReporter).await?;
    print_summary(&summary, output_format)?;
    Ok(summary.exit_code())
}

/// Scans the components directory and rewrites the aggregates.
///
/// An empty or missing components directory writes nothing.
///
/// # Errors
///
/// See [`run`].
pub async fn execute(config: &GeneratorConfig, reporter: &dyn Reporter) -> Result<GenerationSummary> {
    config.validate()?;

    let components_dir = config.components_dir();
    let icons = IconSet::from_identities(scan_existing(
        &components_dir,
        &config.component_suffix,
        reporter,
    )?);
    reporter.progress(&format!(
        "Found {} components in {}",
        icons.len(),
        components_dir.display()
    ));

    let artifacts = write_aggregates(config, &icons, reporter).await?;

    Ok(GenerationSummary {
        icon_count: icons.len(),
        output_dir: config.output_root.display().to_string(),
        artifacts: artifacts
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
        ..GenerationSummary::default()
    })
}
