//! Domain types for svgicon.
//!
//! # Examples
//!
//! ```
//! use svgicon_core::{IconIdentity, PendingSource, SourceKind, derive_identity};
//!
//! let identity = derive_identity("arrow-left.svg").unwrap();
//! let source = PendingSource::direct("<svg/>", identity);
//! assert_eq!(source.kind(), SourceKind::DirectText);
//! assert_eq!(source.identity().component_name(), "ArrowLeft");
//! ```

use crate::naming::{recover_base_name, to_component_name};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Canonical identity of one icon.
///
/// `base_name` is the unique key users see in the generated type artifact;
/// `component_name` names the component file and the generated symbol.
/// Both are fixed at construction.
///
/// Ordering compares `base_name` first, then `component_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IconIdentity {
    base_name: String,
    component_name: String,
}

impl IconIdentity {
    pub(crate) const fn from_parts(base_name: String, component_name: String) -> Self {
        Self {
            base_name,
            component_name,
        }
    }

    /// Reconstructs an identity from an existing component name.
    ///
    /// The component name is kept verbatim; the base name is recovered
    /// with [`recover_base_name`](crate::recover_base_name).
    ///
    /// Returns `None` unless the name is ASCII alphanumeric and is exactly
    /// what the recovered base name would generate. Names that were not
    /// produced by this tool (`Foo'Bar`, `my icon`, `logoMain`) are
    /// rejected so they never reach the generated artifacts.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgicon_core::IconIdentity;
    ///
    /// let id = IconIdentity::from_component_name("LogoMain").unwrap();
    /// assert_eq!(id.base_name(), "logo-main");
    /// assert_eq!(id.component_name(), "LogoMain");
    ///
    /// assert!(IconIdentity::from_component_name("Foo'Bar").is_none());
    /// ```
    #[must_use]
    pub fn from_component_name(component_name: &str) -> Option<Self> {
        if !component_name.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        let base_name = recover_base_name(component_name)?;
        if to_component_name(&base_name) != component_name {
            return None;
        }
        Some(Self::from_parts(base_name, component_name.to_string()))
    }

    /// Returns the base name.
    #[inline]
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Returns the component name.
    #[inline]
    #[must_use]
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Returns the component file name for `suffix` (without the dot).
    ///
    /// # Examples
    ///
    /// ```
    /// use svgicon_core::derive_identity;
    ///
    /// let id = derive_identity("arrow-left").unwrap();
    /// assert_eq!(id.file_name("svelte"), "ArrowLeft.svelte");
    /// ```
    #[must_use]
    pub fn file_name(&self, suffix: &str) -> String {
        format!("{}.{suffix}", self.component_name)
    }
}

impl fmt::Display for IconIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.base_name, self.component_name)
    }
}

/// Where a pending source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// A local `.svg` file
    File,
    /// A remote SVG fetched over HTTP(S)
    Url,
    /// SVG text passed directly on the command line
    DirectText,
}

impl SourceKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Url => "url",
            Self::DirectText => "direct-text",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SVG content of a pending source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePayload {
    /// File to read when the source is rendered
    File(PathBuf),
    /// SVG text already in memory
    Text(String),
}

/// One unit of work before rendering.
///
/// Created by source resolution, consumed exactly once by the render step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSource {
    kind: SourceKind,
    origin: String,
    payload: SourcePayload,
    identity: IconIdentity,
}

impl PendingSource {
    /// Creates a source for a local file, read lazily.
    #[must_use]
    pub fn file(path: impl AsRef<Path>, identity: IconIdentity) -> Self {
        let path = path.as_ref();
        Self {
            kind: SourceKind::File,
            origin: path.display().to_string(),
            payload: SourcePayload::File(path.to_path_buf()),
            identity,
        }
    }

    /// Creates a source for text already fetched from `url`.
    #[must_use]
    pub fn url(url: impl Into<String>, text: impl Into<String>, identity: IconIdentity) -> Self {
        Self {
            kind: SourceKind::Url,
            origin: url.into(),
            payload: SourcePayload::Text(text.into()),
            identity,
        }
    }

    /// Creates a source for SVG text supplied directly.
    #[must_use]
    pub fn direct(text: impl Into<String>, identity: IconIdentity) -> Self {
        Self {
            kind: SourceKind::DirectText,
            origin: format!("direct input ({})", identity.base_name()),
            payload: SourcePayload::Text(text.into()),
            identity,
        }
    }

    /// Returns the source kind.
    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Returns the human-readable provenance.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the payload.
    #[must_use]
    pub const fn payload(&self) -> &SourcePayload {
        &self.payload
    }

    /// Returns the resolved identity.
    #[must_use]
    pub const fn identity(&self) -> &IconIdentity {
        &self.identity
    }
}
