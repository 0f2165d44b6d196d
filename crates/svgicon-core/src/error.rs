//! Error types for svgicon.
//!
//! Every failure in the generator is one of these variants. Most of them are
//! per-item: the pipeline records them against a single source and carries
//! on with the rest of the batch.
//!
//! # Examples
//!
//! ```
//! use svgicon_core::{Error, Result};
//!
//! fn check_suffix(suffix: &str) -> Result<()> {
//!     if suffix.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "component suffix cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_suffix("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for svgicon.
#[derive(Error, Debug)]
pub enum Error {
    /// A raw label sanitized down to nothing.
    ///
    /// Raised by name derivation when the input (filename, URL segment,
    /// or user-supplied name) contains no usable characters.
    #[error("Cannot derive an icon name from '{label}'")]
    InvalidName {
        /// The raw label that failed to sanitize
        label: String,
    },

    /// Two sources in the same run resolved to one component identifier.
    ///
    /// The first occurrence has already been written; the second is
    /// rejected so it cannot silently replace it.
    #[error("Duplicate component '{component}' from {origin} (already generated in this run)")]
    DuplicateComponent {
        /// The colliding component identifier
        component: String,
        /// Provenance of the rejected source
        origin: String,
    },

    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fetching a remote SVG failed.
    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        /// URL that was requested
        url: String,
        /// Description of the failure
        message: String,
    },

    /// The optimizer rejected the SVG markup.
    #[error("Failed to optimize SVG from {origin}: {message}")]
    Optimize {
        /// Provenance of the source being optimized
        origin: String,
        /// Description of the failure
        message: String,
    },

    /// Template rendering failed.
    #[error("Render error: {message}")]
    Render {
        /// Description of the failure
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or contains contradictory settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An item was asked to move to a state it cannot reach.
    #[error("Invalid state transition for '{component}': {from} -> {to}")]
    InvalidTransition {
        /// Component identifier of the item
        component: String,
        /// Current state
        from: &'static str,
        /// Requested state
        to: &'static str,
    },
}

impl Error {
    /// Builds an [`Error::Io`] for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is a within-batch duplicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgicon_core::Error;
    ///
    /// let err = Error::DuplicateComponent {
    ///     component: "MyIcon".to_string(),
    ///     origin: "icons/my_icon.svg".to_string(),
    /// };
    /// assert!(err.is_duplicate());
    /// ```
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateComponent { .. })
    }

    /// Returns `true` if this is an invalid name error.
    #[must_use]
    pub const fn is_invalid_name(&self) -> bool {
        matches!(self, Self::InvalidName { .. })
    }

    /// Returns `true` if this is a filesystem error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a fetch error.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Returns `true` if this is an optimizer error.
    #[must_use]
    pub const fn is_optimize_error(&self) -> bool {
        matches!(self, Self::Optimize { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgicon_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "unknown plugin".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

/// Result type alias for svgicon operations.
pub type Result<T> = std::result::Result<T, Error>;
