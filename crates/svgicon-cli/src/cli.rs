//! Command-line argument model.
//!
//! Every mutual exclusion is declared on the arguments themselves, so clap
//! rejects invalid combinations before any file or network I/O happens.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use svgicon_core::cli::CssClassList;
use svgicon_core::{DEFAULT_OUTPUT_ROOT, GeneratorConfig, OverwritePolicy};

/// Generate Svelte icon components from SVG files, directories, or URLs.
///
/// Each SVG becomes `components/<Name>.svelte` under the output root, and the
/// whole components directory is described by a generated `SvgName.ts`
/// union type and an `SvgIcon.svelte` dynamic loader.
#[derive(Parser, Debug)]
#[command(name = "svgicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SVG files, directories to search recursively, or http(s) URLs
    #[arg(
        value_name = "INPUT",
        conflicts_with = "regenerate",
        required_unless_present_any = ["svg", "regenerate"]
    )]
    pub inputs: Vec<String>,

    /// Inline SVG markup to generate a single component from
    #[arg(long, value_name = "TEXT", requires = "name", conflicts_with = "regenerate")]
    pub svg: Option<String>,

    /// Icon name for the inline SVG
    #[arg(long, value_name = "NAME", requires = "svg")]
    pub name: Option<String>,

    /// Output root directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_ROOT)]
    pub output: PathBuf,

    /// Optimizer configuration file (JSON, or TOML with a .toml extension)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Empty the components directory before generating
    #[arg(long, conflicts_with = "regenerate")]
    pub clean: bool,

    /// CSS class(es) added to every icon's root element
    #[arg(long = "class", value_name = "CLASS")]
    pub class: Option<CssClassList>,

    /// Rebuild the type and loader files from existing components only
    #[arg(long)]
    pub regenerate: bool,

    /// Overwrite existing components without asking
    #[arg(short = 'y', long, conflicts_with = "no_overwrite")]
    pub yes: bool,

    /// Never overwrite existing components
    #[arg(long)]
    pub no_overwrite: bool,

    /// Timeout for fetching URLs, in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", default_value = "pretty")]
    pub format: String,
}

/// SVG text supplied on the command line together with its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectInput {
    /// Raw SVG markup
    pub svg: String,
    /// Label the identity is derived from
    pub name: String,
}

impl Cli {
    /// Returns the overwrite policy selected by `--yes` / `--no-overwrite`.
    #[must_use]
    pub const fn overwrite_policy(&self) -> OverwritePolicy {
        if self.yes {
            OverwritePolicy::Always
        } else if self.no_overwrite {
            OverwritePolicy::Never
        } else {
            OverwritePolicy::Prompt
        }
    }

    /// Returns the inline SVG input, if given.
    #[must_use]
    pub fn direct_input(&self) -> Option<DirectInput> {
        match (&self.svg, &self.name) {
            (Some(svg), Some(name)) => Some(DirectInput {
                svg: svg.clone(),
                name: name.clone(),
            }),
            _ => None,
        }
    }

    /// Builds the generator configuration from the arguments.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::builder()
            .output_root(&self.output)
            .base_class(self.class.clone())
            .clean(self.clean)
            .fetch_timeout(Duration::from_secs(self.timeout))
            .overwrite(self.overwrite_policy())
            .build()
    }
}
