//! Generate command implementation.
//!
//! Runs the full pipeline:
//! 1. Resolves inputs into pending sources
//! 2. Cleans the components directory when requested
//! 3. Classifies conflicts and asks once for the whole batch
//! 4. Optimizes, renders, and writes each source in input order
//! 5. Rescans the components directory and merges in this run's icons
//! 6. Writes the type and loader artifacts

use super::common::{
    FailureReport, GenerationSummary, load_svgo_config, print_summary, write_aggregates,
};
use crate::cli::{Cli, DirectInput};
use crate::prompt::{DialoguerPrompter, Prompter, decide_overwrite};
use crate::scanner::scan_existing;
use crate::sources::{Fetcher, HttpFetcher, SourceResolver};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io;
use std::path::Path;
use svgicon_codegen::{ComponentGenerator, PluginOptimizer};
use svgicon_core::cli::{ExitCode, OutputFormat};
use svgicon_core::{
    BatchTracker, ConflictPlan, Error, GeneratorConfig, IconSet, ItemState, OverwriteDecision,
    PendingSource, PlannedItem, Reporter, SourcePayload, SvgoConfig, TracingReporter,
    derive_identity,
};

/// What to generate.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Paths, directories, and URLs
    pub inputs: Vec<String>,
    /// Inline SVG with its name
    pub direct: Option<DirectInput>,
}

/// External collaborators of the pipeline.
pub struct Collaborators<'a> {
    /// Network access for URL inputs
    pub fetcher: &'a dyn Fetcher,
    /// Overwrite confirmation
    pub prompter: &'a dyn Prompter,
    /// Progress, warning, and error sink
    pub reporter: &'a dyn Reporter,
}

impl std::fmt::Debug for Collaborators<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Runs the generate command from parsed arguments.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the components
/// directory cannot be prepared, or the overwrite prompt fails. Per-item
/// failures are reported in the summary instead.
pub async fn run(cli: &Cli, output_format: OutputFormat) -> Result<ExitCode> {
    let config = cli.generator_config();
    let svgo = load_svgo_config(cli.config.as_deref())?;
    let fetcher = HttpFetcher::new(config.fetch_timeout)?;
    let prompter = DialoguerPrompter::detect();

    let request = GenerateRequest {
        inputs: cli.inputs.clone(),
        direct: cli.direct_input(),
    };
    let collaborators = Collaborators {
        fetcher: &fetcher,
        prompter: &prompter,
        reporter: &TracingReporter,
    };

    let summary = execute(&request, &config, &svgo, &collaborators).await?;
    print_summary(&summary, output_format)?;

    Ok(summary.exit_code())
}

/// Executes the pipeline and returns the summary.
///
/// # Errors
///
/// See [`run`].
pub async fn execute(
    request: &GenerateRequest,
    config: &GeneratorConfig,
    svgo: &SvgoConfig,
    collaborators: &Collaborators<'_>,
) -> Result<GenerationSummary> {
    config.validate()?;
    let reporter = collaborators.reporter;

    let generator = ComponentGenerator::new(
        Box::new(PluginOptimizer::new(svgo)?),
        config.base_class.clone(),
    )?;

    let mut summary = GenerationSummary {
        output_dir: config.output_root.display().to_string(),
        ..GenerationSummary::default()
    };

    let resolver = SourceResolver::new(collaborators.fetcher, reporter);
    let resolved = resolver.resolve(&request.inputs).await;
    let mut sources = resolved.sources;
    summary.failures.extend(resolved.failures.iter().map(|failure| FailureReport {
        origin: failure.input.clone(),
        error: failure.error.to_string(),
    }));

    if let Some(direct) = &request.direct {
        match derive_identity(&direct.name) {
            Some(identity) => sources.push(PendingSource::direct(direct.svg.clone(), identity)),
            None => {
                let error = Error::InvalidName {
                    label: direct.name.clone(),
                };
                reporter.error(&error.to_string());
                summary.failures.push(FailureReport {
                    origin: "--svg".to_string(),
                    error: error.to_string(),
                });
            }
        }
    }

    let resolution_failures = summary.failures.len();
    summary.total = sources.len() + resolution_failures;
    summary.failed = resolution_failures;

    if sources.is_empty() {
        reporter.error("No SVG sources could be resolved; nothing to generate");
        return Ok(summary);
    }

    let components_dir = config.components_dir();
    if config.clean {
        clean_components_dir(&components_dir, reporter).await?;
    }
    tokio::fs::create_dir_all(&components_dir)
        .await
        .map_err(|e| Error::io(&components_dir, e))?;

    let mut plan = ConflictPlan::classify(
        sources,
        &components_dir,
        &config.component_suffix,
        config.clean,
    );

    if plan.has_unresolved() {
        let decision = decide_overwrite(config.overwrite, &plan, collaborators.prompter)?;
        plan.resolve(decision);
        if decision == OverwriteDecision::Decline {
            for item in plan.items() {
                if item.state() == ItemState::ConflictSkip {
                    reporter.warn(&format!(
                        "Kept existing {} (skipped {})",
                        item.target().display(),
                        item.source().origin()
                    ));
                }
            }
        }
    }

    let mut tracker = BatchTracker::new();
    for item in plan.items_mut() {
        if !item.state().is_actionable() {
            continue;
        }

        let outcome = match tracker.check(item.source()) {
            Ok(()) => write_component(item, &generator).await,
            Err(duplicate) => Err(duplicate),
        };

        match outcome {
            Ok(()) => {
                let verb = if item.state() == ItemState::ConflictOverwrite {
                    "Overwrote"
                } else {
                    "Generated"
                };
                item.mark_written()?;
                tracker.record(item.source().identity().clone());
                reporter.progress(&format!("{verb} {}", item.target().display()));
            }
            Err(error) => {
                reporter.error(&format!("{}: {error}", item.source().origin()));
                summary.failures.push(FailureReport {
                    origin: item.source().origin().to_string(),
                    error: error.to_string(),
                });
                item.mark_failed(error)?;
            }
        }
    }

    summary.generated = plan.generated();
    summary.overwritten = plan.overwritten();
    summary.failed += plan.failed();
    summary.skipped = plan.skipped();

    let existing = scan_existing(&components_dir, &config.component_suffix, reporter)?;
    let icons = IconSet::merge(existing, tracker.into_identities());
    summary.icon_count = icons.len();

    match write_aggregates(config, &icons, reporter).await {
        Ok(artifacts) => {
            summary.artifacts = artifacts
                .iter()
                .map(|path| path.display().to_string())
                .collect();
        }
        Err(error) => reporter.error(&format!("Failed to write aggregate files: {error:#}")),
    }

    tracing::info!(
        "Generated {}, overwrote {}, skipped {}, failed {} of {}",
        summary.generated,
        summary.overwritten,
        summary.skipped,
        summary.failed,
        summary.total
    );

    Ok(summary)
}

/// Reads, optimizes, renders, and writes one component.
async fn write_component(item: &PlannedItem, generator: &ComponentGenerator) -> svgicon_core::Result<()> {
    let source = item.source();
    let svg: Cow<'_, str> = match source.payload() {
        SourcePayload::File(path) => Cow::Owned(
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| Error::io(path, e))?,
        ),
        SourcePayload::Text(text) => Cow::Borrowed(text),
    };

    let component = generator.generate(source.identity(), &svg, source.origin())?;

    tokio::fs::write(item.target(), component)
        .await
        .map_err(|e| Error::io(item.target(), e))
}

/// Removes every file in the components directory.
async fn clean_components_dir(dir: &Path, reporter: &dyn Reporter) -> Result<()> {
    match tokio::fs::remove_dir_all(dir).await {
        Ok(()) => reporter.progress(&format!("Cleaned {}", dir.display())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(Error::io(dir, e))
                .with_context(|| format!("failed to clean {}", dir.display()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::exit_code_for;
    use async_trait::async_trait;
    use std::fs;
    use svgicon_core::RecordingReporter;
    use tempfile::TempDir;

    struct NoNetwork;

    #[async_trait]
    impl Fetcher for NoNetwork {
        async fn fetch(&self, url: &str) -> svgicon_core::Result<String> {
            Err(Error::Fetch {
                url: url.to_string(),
                message: "offline".to_string(),
            })
        }
    }

    struct Refuse;

    impl Prompter for Refuse {
        fn confirm_overwrite(&self, _existing: &[String]) -> Result<bool> {
            Ok(false)
        }
    }

    fn config(dir: &TempDir) -> GeneratorConfig {
        GeneratorConfig::builder().output_root(dir.path()).build()
    }

    #[tokio::test]
    async fn test_direct_input_generates_component_and_aggregates() {
        let dir = TempDir::new().unwrap();
        let reporter = RecordingReporter::new();
        let collaborators = Collaborators {
            fetcher: &NoNetwork,
            prompter: &Refuse,
            reporter: &reporter,
        };
        let request = GenerateRequest {
            inputs: Vec::new(),
            direct: Some(DirectInput {
                svg: r#"<svg viewBox="0 0 1 1"><path/></svg>"#.to_string(),
                name: "Check Mark".to_string(),
            }),
        };

        let summary = execute(&request, &config(&dir), &SvgoConfig::default(), &collaborators)
            .await
            .unwrap();

        assert_eq!(summary.total, 1);
        assert_eq!(summary.generated, 1);
        assert_eq!(summary.icon_count, 1);
        assert_eq!(summary.exit_code(), ExitCode::SUCCESS);
        assert!(dir.path().join("components/CheckMark.svelte").is_file());
        assert!(dir.path().join("SvgName.ts").is_file());
        assert!(dir.path().join("SvgIcon.svelte").is_file());
    }

    #[tokio::test]
    async fn test_nothing_resolved_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let components = dir.path().join("components");
        fs::create_dir_all(&components).unwrap();
        fs::write(components.join("Keep.svelte"), "keep").unwrap();

        let reporter = RecordingReporter::new();
        let collaborators = Collaborators {
            fetcher: &NoNetwork,
            prompter: &Refuse,
            reporter: &reporter,
        };
        let request = GenerateRequest {
            inputs: vec!["https://example.com/a.svg".to_string()],
            direct: None,
        };
        let config = GeneratorConfig {
            clean: true,
            ..config(&dir)
        };

        let summary = execute(&request, &config, &SvgoConfig::default(), &collaborators)
            .await
            .unwrap();

        assert_eq!(summary.total, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.exit_code(), ExitCode::NOTHING_GENERATED);
        assert!(components.join("Keep.svelte").is_file());
        assert!(!dir.path().join("SvgName.ts").exists());
    }

    #[tokio::test]
    async fn test_invalid_direct_name_counts_as_failure() {
        let dir = TempDir::new().unwrap();
        let reporter = RecordingReporter::new();
        let collaborators = Collaborators {
            fetcher: &NoNetwork,
            prompter: &Refuse,
            reporter: &reporter,
        };
        let request = GenerateRequest {
            inputs: Vec::new(),
            direct: Some(DirectInput {
                svg: "<svg/>".to_string(),
                name: "???".to_string(),
            }),
        };

        let summary = execute(&request, &config(&dir), &SvgoConfig::default(), &collaborators)
            .await
            .unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failures[0].origin, "--svg");
        assert!(summary.artifacts.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected_before_io() {
        let dir = TempDir::new().unwrap();
        let collaborators = Collaborators {
            fetcher: &NoNetwork,
            prompter: &Refuse,
            reporter: &RecordingReporter::new(),
        };
        let config = GeneratorConfig {
            component_suffix: String::new(),
            ..config(&dir)
        };

        let err = execute(
            &GenerateRequest::default(),
            &config,
            &SvgoConfig::default(),
            &collaborators,
        )
        .await
        .unwrap_err();

        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
        assert!(!dir.path().join("components").exists());
    }
}
