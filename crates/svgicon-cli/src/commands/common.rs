//! Pieces shared by the generate and regenerate commands.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use svgicon_codegen::AggregateEmitter;
use svgicon_core::cli::ExitCode;
use svgicon_core::{Error, GeneratorConfig, IconSet, Reporter, SvgoConfig};

/// One failed input or item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// Where the source came from
    pub origin: String,
    /// What went wrong
    pub error: String,
}

/// Final report of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Inputs and sources attempted
    pub total: usize,
    /// Components written to new files
    pub generated: usize,
    /// Components written over existing files
    pub overwritten: usize,
    /// Inputs or sources that failed
    pub failed: usize,
    /// Sources skipped because overwriting was declined
    pub skipped: usize,
    /// Icons listed in the type artifact
    pub icon_count: usize,
    /// Output root
    pub output_dir: String,
    /// Aggregate files written
    pub artifacts: Vec<String>,
    /// Details of every failure
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureReport>,
}

impl GenerationSummary {
    /// Exit code for this run: success once any aggregate was written.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        if self.artifacts.is_empty() {
            ExitCode::NOTHING_GENERATED
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Maps a command error to an exit code.
///
/// Configuration and argument problems are invalid input; anything else
/// means nothing could be generated.
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<Error>() {
        Some(Error::ConfigError { .. } | Error::InvalidArgument(_) | Error::InvalidName { .. }) => {
            ExitCode::INVALID_INPUT
        }
        _ => ExitCode::NOTHING_GENERATED,
    }
}

/// Loads the optimizer configuration, or the defaults when no file is given.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] if the file cannot be read or parsed.
pub fn load_svgo_config(path: Option<&Path>) -> Result<SvgoConfig> {
    let Some(path) = path else {
        return Ok(SvgoConfig::default());
    };

    SvgoConfig::load(path)
        .map_err(|e| Error::ConfigError {
            message: format!("cannot load optimizer config {}: {e}", path.display()),
        })
        .map_err(anyhow::Error::from)
}

/// Writes the type and loader artifacts for `icons`.
///
/// With an empty set nothing is written and a warning is reported.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub async fn write_aggregates(
    config: &GeneratorConfig,
    icons: &IconSet,
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    if icons.is_empty() {
        reporter.warn("No components found; skipping type and loader generation");
        return Ok(Vec::new());
    }

    let emitter = AggregateEmitter::new(config).context("failed to create aggregate emitter")?;

    let artifacts = [
        (
            config.type_artifact_path(),
            emitter.render_type_artifact(icons)?,
        ),
        (
            config.loader_artifact_path(),
            emitter.render_loader_artifact()?,
        ),
    ];

    tokio::fs::create_dir_all(&config.output_root)
        .await
        .map_err(|e| Error::io(&config.output_root, e))?;

    let mut written = Vec::with_capacity(artifacts.len());
    for (path, text) in artifacts {
        tokio::fs::write(&path, text)
            .await
            .map_err(|e| Error::io(&path, e))?;
        reporter.progress(&format!("Wrote {}", path.display()));
        written.push(path);
    }

    tracing::info!("Aggregates list {} icons", icons.len());
    Ok(written)
}

/// Prints the summary in the requested format.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn print_summary(
    summary: &GenerationSummary,
    format: svgicon_core::cli::OutputFormat,
) -> Result<()> {
    let formatted = crate::formatters::format_output(summary, format)?;
    println!("{formatted}");
    Ok(())
}
