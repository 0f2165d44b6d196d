//! Configuration types for svgicon.
//!
//! [`GeneratorConfig`] describes the output layout and run options.
//! [`SvgoConfig`] is passed through to the optimizer; a user file is merged
//! over the defaults shallowly, so a user-supplied `plugins` list replaces
//! the default list instead of being combined with it.
//!
//! # Examples
//!
//! ```
//! use svgicon_core::{GeneratorConfig, SvgoConfig};
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.components_dir(), std::path::Path::new("src/lib/svg-icons/components"));
//!
//! let svgo = SvgoConfig::from_json_str(r#"{ "plugins": ["removeComments"] }"#).unwrap();
//! assert_eq!(svgo.enabled_plugins().collect::<Vec<_>>(), ["removeComments"]);
//! assert!(svgo.multipass);
//! ```

use crate::cli::CssClassList;
use crate::error::{Error, Result};
use crate::types::IconIdentity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_ROOT: &str = "src/lib/svg-icons";

/// What to do when a component file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverwritePolicy {
    /// Ask once for the whole batch
    #[default]
    Prompt,
    /// Overwrite without asking
    Always,
    /// Keep existing files without asking
    Never,
}

/// Output layout and run options.
///
/// # Examples
///
/// ```
/// use svgicon_core::{GeneratorConfig, OverwritePolicy};
///
/// let config = GeneratorConfig::builder()
///     .output_root("web/icons")
///     .clean(true)
///     .overwrite(OverwritePolicy::Always)
///     .build();
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.type_artifact_path(), std::path::Path::new("web/icons/SvgName.ts"));
/// assert_eq!(config.loader_artifact_path(), std::path::Path::new("web/icons/SvgIcon.svelte"));
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root directory for all generated files.
    /// Default: `src/lib/svg-icons`
    pub output_root: PathBuf,

    /// Name of the components subdirectory under the output root.
    /// Default: `components`
    pub components_dir_name: String,

    /// Component file extension, without the dot.
    /// Default: `svelte`
    pub component_suffix: String,

    /// Base name of the type artifact (written with a `.ts` extension).
    /// Default: `SvgName`
    pub type_artifact_name: String,

    /// Base name of the loader artifact (written with the component suffix).
    /// Default: `SvgIcon`
    pub loader_artifact_name: String,

    /// CSS classes added to the root element of every rendered icon.
    /// Default: None
    pub base_class: Option<CssClassList>,

    /// Empty the components directory before generating.
    /// Default: false
    pub clean: bool,

    /// Timeout for fetching remote SVGs.
    /// Default: 30 seconds
    pub fetch_timeout: Duration,

    /// Handling of existing component files.
    /// Default: `Prompt`
    pub overwrite: OverwritePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            components_dir_name: "components".to_string(),
            component_suffix: "svelte".to_string(),
            type_artifact_name: "SvgName".to_string(),
            loader_artifact_name: "SvgIcon".to_string(),
            base_class: None,
            clean: false,
            fetch_timeout: Duration::from_secs(30),
            overwrite: OverwritePolicy::Prompt,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Returns the components directory.
    #[must_use]
    pub fn components_dir(&self) -> PathBuf {
        self.output_root.join(&self.components_dir_name)
    }

    /// Returns the component file path for `identity`.
    #[must_use]
    pub fn component_path(&self, identity: &IconIdentity) -> PathBuf {
        self.components_dir()
            .join(identity.file_name(&self.component_suffix))
    }

    /// Returns the type artifact path.
    #[must_use]
    pub fn type_artifact_path(&self) -> PathBuf {
        self.output_root
            .join(format!("{}.ts", self.type_artifact_name))
    }

    /// Returns the loader artifact path.
    #[must_use]
    pub fn loader_artifact_path(&self) -> PathBuf {
        self.output_root.join(format!(
            "{}.{}",
            self.loader_artifact_name, self.component_suffix
        ))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - Any name or the suffix is empty, or contains a path separator
    /// - The suffix starts with a dot
    /// - The fetch timeout is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use svgicon_core::GeneratorConfig;
    ///
    /// let mut config = GeneratorConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.component_suffix = ".svelte".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("components directory name", &self.components_dir_name),
            ("component suffix", &self.component_suffix),
            ("type artifact name", &self.type_artifact_name),
            ("loader artifact name", &self.loader_artifact_name),
        ];

        for (what, value) in names {
            if value.is_empty() {
                return Err(Error::ConfigError {
                    message: format!("{what} cannot be empty"),
                });
            }
            if value.contains(['/', '\\']) {
                return Err(Error::ConfigError {
                    message: format!("{what} cannot contain a path separator: '{value}'"),
                });
            }
        }

        if self.component_suffix.starts_with('.') {
            return Err(Error::ConfigError {
                message: format!(
                    "component suffix is given without the dot: '{}'",
                    self.component_suffix
                ),
            });
        }

        if self.fetch_timeout.is_zero() {
            return Err(Error::ConfigError {
                message: "fetch timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a builder starting from defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output root.
    #[must_use]
    pub fn output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.output_root = root.into();
        self
    }

    /// Sets the component file extension.
    #[must_use]
    pub fn component_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.component_suffix = suffix.into();
        self
    }

    /// Sets the base CSS classes.
    #[must_use]
    pub fn base_class(mut self, class: Option<CssClassList>) -> Self {
        self.config.base_class = class;
        self
    }

    /// Sets whether to empty the components directory first.
    #[must_use]
    pub const fn clean(mut self, clean: bool) -> Self {
        self.config.clean = clean;
        self
    }

    /// Sets the fetch timeout.
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.config.fetch_timeout = timeout;
        self
    }

    /// Sets the overwrite policy.
    #[must_use]
    pub const fn overwrite(mut self, policy: OverwritePolicy) -> Self {
        self.config.overwrite = policy;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

/// One optimizer plugin entry: a bare name or `{ name, enabled }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginSpec {
    /// Enabled plugin given by name
    Name(String),
    /// Plugin with an explicit switch
    Detailed {
        /// Plugin name
        name: String,
        /// Whether the plugin runs
        #[serde(default = "enabled_by_default")]
        enabled: bool,
    },
}

const fn enabled_by_default() -> bool {
    true
}

impl PluginSpec {
    /// Returns the plugin name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name, .. } => name,
        }
    }

    /// Returns `true` if the plugin runs.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Name(_) => true,
            Self::Detailed { enabled, .. } => *enabled,
        }
    }
}

/// Optimizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvgoConfig {
    /// Repeat the plugin pipeline until the output stops changing.
    pub multipass: bool,
    /// Plugins in execution order.
    pub plugins: Vec<PluginSpec>,
}

/// User-supplied fields; anything absent keeps its default.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SvgoOverrides {
    multipass: Option<bool>,
    plugins: Option<Vec<PluginSpec>>,
}

impl Default for SvgoConfig {
    fn default() -> Self {
        let plugins = [
            "removeXMLProcInst",
            "removeDoctype",
            "removeComments",
            "removeMetadata",
            "removeEditorsNSData",
            "removeDimensions",
            "collapseWhitespace",
        ];
        Self {
            multipass: true,
            plugins: plugins
                .into_iter()
                .map(|name| PluginSpec::Name(name.to_string()))
                .collect(),
        }
    }
}

impl SvgoConfig {
    fn with_overrides(overrides: SvgoOverrides) -> Self {
        let defaults = Self::default();
        Self {
            multipass: overrides.multipass.unwrap_or(defaults.multipass),
            plugins: overrides.plugins.unwrap_or(defaults.plugins),
        }
    }

    /// Parses a JSON configuration and merges it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the JSON is malformed or
    /// has unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let overrides: SvgoOverrides =
            serde_json::from_str(json).map_err(|e| Error::SerializationError {
                message: format!("invalid optimizer configuration: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self::with_overrides(overrides))
    }

    /// Parses a TOML configuration and merges it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the TOML is malformed or
    /// has unknown fields.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let overrides: SvgoOverrides =
            toml::from_str(text).map_err(|e| Error::SerializationError {
                message: format!("invalid optimizer configuration: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self::with_overrides(overrides))
    }

    /// Loads a configuration file; `.toml` files are read as TOML,
    /// everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::SerializationError`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml_str(&text)?
        } else {
            Self::from_json_str(&text)?
        };

        tracing::debug!(
            "Loaded optimizer configuration from {} ({} plugins)",
            path.display(),
            config.plugins.len()
        );
        Ok(config)
    }

    /// Returns the names of enabled plugins in order.
    pub fn enabled_plugins(&self) -> impl Iterator<Item = &str> {
        self.plugins
            .iter()
            .filter(|plugin| plugin.is_enabled())
            .map(PluginSpec::name)
    }
}
