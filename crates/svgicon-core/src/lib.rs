//! Core types and logic for svgicon.
//!
//! This crate owns everything about an icon set that has real invariants:
//! how raw labels become icon identities, how an icon set is reconstructed
//! and merged, and how write conflicts are planned and resolved. It performs
//! no rendering and (apart from existence checks) no I/O.
//!
//! # Architecture
//!
//! The core consists of:
//! - Naming (`derive_identity`, `recover_base_name`)
//! - Domain types (`IconIdentity`, `PendingSource`, `IconSet`)
//! - Merging (`IconSet::merge`) and within-batch duplicate tracking
//! - Conflict planning (`ConflictPlan`)
//! - Reporter capability for progress, warning, and error events
//! - Configuration types and the error hierarchy
//!
//! # Examples
//!
//! ```
//! use svgicon_core::{IconSet, derive_identity};
//!
//! let existing = vec![derive_identity("logo-main.svg").unwrap()];
//! let incoming = vec![derive_identity("arrow-left.svg").unwrap()];
//!
//! let set = IconSet::merge(existing, incoming);
//! let names: Vec<_> = set.iter().map(|i| i.base_name()).collect();
//! assert_eq!(names, ["arrow-left", "logo-main"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod conflict;
mod error;
mod icon_set;
mod naming;
mod reporter;
mod types;

pub mod cli;

pub use config::{
    DEFAULT_OUTPUT_ROOT, GeneratorConfig, GeneratorConfigBuilder, OverwritePolicy, PluginSpec,
    SvgoConfig,
};
pub use conflict::{ConflictPlan, ItemState, OverwriteDecision, PlannedItem};
pub use error::{Error, Result};
pub use icon_set::{BatchTracker, IconSet};
pub use naming::{derive_identity, recover_base_name, sanitize_base_name, to_component_name};
pub use reporter::{RecordingReporter, Reporter, ReporterEvent, TracingReporter};
pub use types::{IconIdentity, PendingSource, SourceKind, SourcePayload};
