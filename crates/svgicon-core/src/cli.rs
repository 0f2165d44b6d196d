//! CLI-specific types and utilities.
//!
//! Strong types for command-line concepts: output format, exit code, and
//! the validated CSS class list injected into generated components.
//!
//! # Examples
//!
//! ```
//! use svgicon_core::cli::{CssClassList, ExitCode, OutputFormat};
//!
//! let format = OutputFormat::Pretty;
//! assert_eq!(format.as_str(), "pretty");
//!
//! let code = ExitCode::SUCCESS;
//! assert_eq!(code.as_i32(), 0);
//!
//! let class = CssClassList::new("icon icon-md").unwrap();
//! assert_eq!(class.as_str(), "icon icon-md");
//! ```

use std::fmt;
use std::str::FromStr;

/// CLI output format.
///
/// # Examples
///
/// ```
/// use svgicon_core::cli::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Plain text output for scripts
    Text,
    /// Pretty-printed output with colors for human reading
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            ))),
        }
    }
}

/// CLI exit code with semantic meaning.
///
/// # Examples
///
/// ```
/// use svgicon_core::cli::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert_eq!(i32::from(ExitCode::INVALID_INPUT), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// At least one artifact was written (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// Nothing could be generated (exit code 1).
    pub const NOTHING_GENERATED: Self = Self(1);

    /// Invalid arguments or configuration (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated, space-separated list of CSS class names.
///
/// The value is spliced into a generated component's markup, so only
/// `[A-Za-z0-9_-]` and single spaces between classes are accepted.
///
/// # Examples
///
/// ```
/// use svgicon_core::cli::CssClassList;
///
/// assert!(CssClassList::new("icon").is_ok());
/// assert!(CssClassList::new("  icon   small ").unwrap().as_str() == "icon small");
/// assert!(CssClassList::new("icon\" onload=\"x").is_err());
/// assert!(CssClassList::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssClassList(String);

impl CssClassList {
    /// Creates a validated class list, normalizing whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// the list is empty or contains characters other than letters, digits,
    /// `-`, `_`, and whitespace.
    pub fn new(s: impl AsRef<str>) -> crate::Result<Self> {
        let classes: Vec<&str> = s.as_ref().split_whitespace().collect();

        if classes.is_empty() {
            return Err(crate::Error::InvalidArgument(
                "class list cannot be empty".to_string(),
            ));
        }

        if let Some(bad) = classes.iter().find(|class| {
            !class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }) {
            return Err(crate::Error::InvalidArgument(format!(
                "invalid CSS class '{bad}' (allowed: a-z, A-Z, 0-9, -, _)"
            )));
        }

        Ok(Self(classes.join(" ")))
    }

    /// Returns the class list as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CssClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CssClassList {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
