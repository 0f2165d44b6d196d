//! Icon set merging and within-batch duplicate tracking.
//!
//! The icon set is never persisted. It is rebuilt from the components
//! directory on every run and merged with the identities generated in that
//! run; the aggregate artifacts are views of the result.

use crate::error::{Error, Result};
use crate::types::{IconIdentity, PendingSource};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Deduplicated, sorted collection of icon identities.
///
/// Keys (`component_name`) are unique and entries are ordered by
/// `base_name`, so any two sets with the same members iterate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconSet {
    icons: Vec<IconIdentity>,
}

impl IconSet {
    /// Creates an empty icon set.
    #[must_use]
    pub const fn new() -> Self {
        Self { icons: Vec::new() }
    }

    /// Merges pre-existing identities with a freshly generated batch.
    ///
    /// Entries are keyed by component name. `existing` is inserted first,
    /// then `incoming`, so on a key collision the incoming identity wins.
    /// The result is sorted ascending by base name.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgicon_core::{IconIdentity, IconSet, derive_identity};
    ///
    /// // Scanned from disk: base name recovered as "my-icon"
    /// let existing = vec![IconIdentity::from_component_name("MyIcon").unwrap()];
    /// // Generated this run from "my_icon.svg"
    /// let incoming = vec![derive_identity("my_icon.svg").unwrap()];
    ///
    /// let set = IconSet::merge(existing, incoming);
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.iter().next().unwrap().base_name(), "my_icon");
    /// ```
    #[must_use]
    pub fn merge<E, I>(existing: E, incoming: I) -> Self
    where
        E: IntoIterator<Item = IconIdentity>,
        I: IntoIterator<Item = IconIdentity>,
    {
        let mut by_component: HashMap<String, IconIdentity> = HashMap::new();

        for identity in existing.into_iter().chain(incoming) {
            by_component.insert(identity.component_name().to_string(), identity);
        }

        let mut icons: Vec<IconIdentity> = by_component.into_values().collect();
        icons.sort();

        // Two distinct component names recovering the same base name would
        // produce a duplicate union member. Keep the first in sort order.
        icons.dedup_by(|later, earlier| {
            let duplicate = later.base_name() == earlier.base_name();
            if duplicate {
                tracing::warn!(
                    "Base name '{}' claimed by both {} and {}; keeping {}",
                    earlier.base_name(),
                    earlier.component_name(),
                    later.component_name(),
                    earlier.component_name()
                );
            }
            duplicate
        });

        Self { icons }
    }

    /// Builds a set from identities in any order.
    #[must_use]
    pub fn from_identities(identities: impl IntoIterator<Item = IconIdentity>) -> Self {
        Self::merge(identities, std::iter::empty())
    }

    /// Returns an iterator over identities in base-name order.
    pub fn iter(&self) -> std::slice::Iter<'_, IconIdentity> {
        self.icons.iter()
    }

    /// Returns the number of icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns `true` if the set has no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Returns the base names in order.
    #[must_use]
    pub fn base_names(&self) -> Vec<&str> {
        self.icons.iter().map(IconIdentity::base_name).collect()
    }

    /// Consumes the set and returns the sorted identities.
    #[must_use]
    pub fn into_vec(self) -> Vec<IconIdentity> {
        self.icons
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconIdentity;
    type IntoIter = std::slice::Iter<'a, IconIdentity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tracks component names written during one run.
///
/// The first source to write a component claims it; any later source with
/// the same component name is rejected rather than overwriting a file this
/// run has just produced. A source that failed before writing claims
/// nothing.
///
/// # Examples
///
/// ```
/// use svgicon_core::{BatchTracker, PendingSource, derive_identity};
///
/// let first = PendingSource::direct("<svg/>", derive_identity("My Icon.svg").unwrap());
/// let second = PendingSource::direct("<svg/>", derive_identity("my_icon.svg").unwrap());
///
/// let mut batch = BatchTracker::new();
/// assert!(batch.check(&first).is_ok());
/// batch.record(first.identity().clone());
///
/// let err = batch.check(&second).unwrap_err();
/// assert!(err.is_duplicate());
/// ```
#[derive(Debug, Default)]
pub struct BatchTracker {
    claimed: HashSet<String>,
    written: Vec<IconIdentity>,
}

impl BatchTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether `source` may be written in this run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateComponent`] if an earlier source already
    /// wrote the same component name.
    pub fn check(&self, source: &PendingSource) -> Result<()> {
        let component = source.identity().component_name();
        if self.claimed.contains(component) {
            return Err(Error::DuplicateComponent {
                component: component.to_string(),
                origin: source.origin().to_string(),
            });
        }
        Ok(())
    }

    /// Records a successfully written identity.
    pub fn record(&mut self, identity: IconIdentity) {
        if self.claimed.insert(identity.component_name().to_string()) {
            self.written.push(identity);
        }
    }

    /// Returns the number of identities written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// Consumes the tracker and returns the written identities in write order.
    #[must_use]
    pub fn into_identities(self) -> Vec<IconIdentity> {
        self.written
    }
}
