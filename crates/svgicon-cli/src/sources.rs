//! Source resolution.
//!
//! Turns command-line inputs into [`PendingSource`]s. Each input is a URL,
//! a directory searched recursively, or a single `.svg` file. A bad input
//! never aborts resolution; it is reported and recorded as a
//! [`SourceFailure`] while the remaining inputs are still resolved.

use async_trait::async_trait;
use reqwest::Url;
use std::path::Path;
use std::time::Duration;
use svgicon_core::{Error, IconIdentity, PendingSource, Reporter, Result, derive_identity};
use walkdir::{DirEntry, WalkDir};

/// Directories never searched for SVGs, in addition to hidden ones.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Fetches SVG text over the network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the body of `url` as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] on connection failure, timeout, or a
    /// non-success status.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// [`Fetcher`] backed by `reqwest` with a request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("svgicon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::ConfigError {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let fetch_error = |e: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        tracing::debug!("Fetching {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?;

        response.text().await.map_err(fetch_error)
    }
}

/// An input that produced no source.
#[derive(Debug)]
pub struct SourceFailure {
    /// The input as given
    pub input: String,
    /// Why it failed
    pub error: Error,
}

/// Result of resolving all inputs.
#[derive(Debug, Default)]
pub struct ResolvedSources {
    /// Sources in input order, directory entries in walk order
    pub sources: Vec<PendingSource>,
    /// Inputs that failed
    pub failures: Vec<SourceFailure>,
}

/// Returns `true` if `input` is an `http` or `https` URL.
#[must_use]
pub fn is_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Derives an identity for a URL from its last non-empty path segment.
///
/// Falls back to `icon-<position>` when the URL has no usable segment.
///
/// # Examples
///
/// ```
/// use svgicon_cli::sources::url_identity;
///
/// let id = url_identity("https://cdn.example.com/icons/arrow-left.svg?v=2", 1).unwrap();
/// assert_eq!(id.component_name(), "ArrowLeft");
///
/// let id = url_identity("https://example.com/", 3).unwrap();
/// assert_eq!(id.base_name(), "icon-3");
/// ```
#[must_use]
pub fn url_identity(url: &str, position: usize) -> Option<IconIdentity> {
    Url::parse(url)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
                .and_then(derive_identity)
        })
        .or_else(|| derive_identity(&format!("icon-{position}")))
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

/// Resolves inputs through a [`Fetcher`] and reports through a [`Reporter`].
pub struct SourceResolver<'a> {
    fetcher: &'a dyn Fetcher,
    reporter: &'a dyn Reporter,
}

impl std::fmt::Debug for SourceResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceResolver").finish_non_exhaustive()
    }
}

impl<'a> SourceResolver<'a> {
    /// Creates a resolver.
    #[must_use]
    pub fn new(fetcher: &'a dyn Fetcher, reporter: &'a dyn Reporter) -> Self {
        Self { fetcher, reporter }
    }

    /// Resolves every input, in order.
    pub async fn resolve(&self, inputs: &[String]) -> ResolvedSources {
        let mut resolved = ResolvedSources::default();

        for (index, input) in inputs.iter().enumerate() {
            if is_url(input) {
                self.resolve_url(input, index + 1, &mut resolved).await;
            } else {
                self.resolve_path(input, &mut resolved);
            }
        }

        tracing::debug!(
            "Resolved {} sources ({} failed inputs)",
            resolved.sources.len(),
            resolved.failures.len()
        );
        resolved
    }

    async fn resolve_url(&self, url: &str, position: usize, resolved: &mut ResolvedSources) {
        match self.fetcher.fetch(url).await {
            Ok(text) => match url_identity(url, position) {
                Some(identity) => resolved.sources.push(PendingSource::url(url, text, identity)),
                None => self.fail(
                    url,
                    Error::InvalidName {
                        label: url.to_string(),
                    },
                    resolved,
                ),
            },
            Err(error) => self.fail(url, error, resolved),
        }
    }

    fn resolve_path(&self, input: &str, resolved: &mut ResolvedSources) {
        let path = Path::new(input);
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => return self.fail(input, Error::io(path, e), resolved),
        };

        if metadata.is_dir() {
            self.resolve_dir(path, resolved);
        } else if has_svg_extension(path) {
            self.push_file(path, resolved);
        } else {
            self.reporter
                .warn(&format!("Skipping {input}: not an SVG file or directory"));
        }
    }

    fn resolve_dir(&self, dir: &Path, resolved: &mut ResolvedSources) {
        let before = resolved.sources.len();

        let walker = WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry));

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() && has_svg_extension(entry.path()) => {
                    self.push_file(entry.path(), resolved);
                }
                Ok(_) => {}
                Err(e) => self
                    .reporter
                    .warn(&format!("Skipping unreadable entry in {}: {e}", dir.display())),
            }
        }

        if resolved.sources.len() == before {
            self.reporter
                .warn(&format!("No SVG files found in {}", dir.display()));
        }
    }

    fn push_file(&self, path: &Path, resolved: &mut ResolvedSources) {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match derive_identity(&label) {
            Some(identity) => resolved.sources.push(PendingSource::file(path, identity)),
            None => self.fail(
                &path.display().to_string(),
                Error::InvalidName { label },
                resolved,
            ),
        }
    }

    fn fail(&self, input: &str, error: Error, resolved: &mut ResolvedSources) {
        self.reporter.error(&format!("{input}: {error}"));
        resolved.failures.push(SourceFailure {
            input: input.to_string(),
            error,
        });
    }
}
