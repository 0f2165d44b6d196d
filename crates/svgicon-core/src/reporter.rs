//! Progress, warning, and error reporting.
//!
//! Pipeline code reports per-item events through a [`Reporter`] rather than
//! logging directly, so it can be exercised in tests without capturing
//! output.

use std::sync::{Mutex, PoisonError};

/// One reported event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterEvent {
    /// Normal progress
    Progress(String),
    /// Something was skipped or degraded
    Warning(String),
    /// A per-item failure
    Error(String),
}

impl ReporterEvent {
    /// Returns the event message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Progress(m) | Self::Warning(m) | Self::Error(m) => m,
        }
    }
}

/// Receiver for pipeline events.
pub trait Reporter: Send + Sync {
    /// Receives one event.
    fn report(&self, event: ReporterEvent);

    /// Reports progress.
    fn progress(&self, message: &str) {
        self.report(ReporterEvent::Progress(message.to_string()));
    }

    /// Reports a warning.
    fn warn(&self, message: &str) {
        self.report(ReporterEvent::Warning(message.to_string()));
    }

    /// Reports an error.
    fn error(&self, message: &str) {
        self.report(ReporterEvent::Error(message.to_string()));
    }
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: ReporterEvent) {
        match event {
            ReporterEvent::Progress(message) => tracing::info!("{message}"),
            ReporterEvent::Warning(message) => tracing::warn!("{message}"),
            ReporterEvent::Error(message) => tracing::error!("{message}"),
        }
    }
}

/// Collects events in memory.
///
/// # Examples
///
/// ```
/// use svgicon_core::{RecordingReporter, Reporter};
///
/// let reporter = RecordingReporter::new();
/// reporter.warn("skipping notes.txt");
/// assert_eq!(reporter.warnings(), ["skipping notes.txt"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReporterEvent>>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded event.
    #[must_use]
    pub fn events(&self) -> Vec<ReporterEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn messages(&self, pick: fn(&ReporterEvent) -> bool) -> Vec<String> {
        self.events()
            .iter()
            .filter(|event| pick(event))
            .map(|event| event.message().to_string())
            .collect()
    }

    /// Returns recorded warning messages.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.messages(|event| matches!(event, ReporterEvent::Warning(_)))
    }

    /// Returns recorded error messages.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages(|event| matches!(event, ReporterEvent::Error(_)))
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: ReporterEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
