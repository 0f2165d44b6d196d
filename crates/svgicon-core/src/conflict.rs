//! Write-conflict planning.
//!
//! Conflict handling is a three-phase pipeline:
//!
//! 1. **Classify**: every pending source is checked against its target
//!    path and becomes `NoConflict` or `ConflictUnresolved`.
//! 2. **Resolve**: all unresolved conflicts are settled by one decision,
//!    either all overwritten or all skipped.
//! 3. **Execute**: actionable items are rendered and written by the caller,
//!    ending in `Written` or `Failed`.
//!
//! # Examples
//!
//! ```
//! use svgicon_core::{ConflictPlan, ItemState, OverwriteDecision, PendingSource, derive_identity};
//! # let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("Star.svelte"), "old").unwrap();
//!
//! let sources = vec![
//!     PendingSource::direct("<svg/>", derive_identity("star").unwrap()),
//!     PendingSource::direct("<svg/>", derive_identity("moon").unwrap()),
//! ];
//!
//! let mut plan = ConflictPlan::classify(sources, dir.path(), "svelte", false);
//! assert_eq!(plan.conflicts().count(), 1);
//!
//! plan.resolve(OverwriteDecision::Decline);
//! assert_eq!(plan.items()[0].state(), ItemState::ConflictSkip);
//! assert_eq!(plan.items()[1].state(), ItemState::NoConflict);
//! ```

use crate::error::{Error, Result};
use crate::types::PendingSource;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Lifecycle state of one planned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemState {
    /// Not yet classified
    Pending,
    /// Target does not exist (or the directory was reset)
    NoConflict,
    /// Target exists; awaiting the batch decision
    ConflictUnresolved,
    /// Target exists; the batch decision was to overwrite
    ConflictOverwrite,
    /// Target exists; the batch decision was to keep it
    ConflictSkip,
    /// Rendered and written
    Written,
    /// Render or write failed, or rejected as a duplicate
    Failed,
}

impl ItemState {
    /// Returns the string representation of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::NoConflict => "no-conflict",
            Self::ConflictUnresolved => "conflict-unresolved",
            Self::ConflictOverwrite => "conflict-resolved-overwrite",
            Self::ConflictSkip => "conflict-resolved-skip",
            Self::Written => "written",
            Self::Failed => "failed",
        }
    }

    /// Returns `true` if `next` is reachable from this state in one step.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::NoConflict | Self::ConflictUnresolved)
                | (
                    Self::ConflictUnresolved,
                    Self::ConflictOverwrite | Self::ConflictSkip
                )
                | (
                    Self::NoConflict | Self::ConflictOverwrite,
                    Self::Written | Self::Failed
                )
        )
    }

    /// Returns `true` if the item should be rendered and written.
    #[must_use]
    pub const fn is_actionable(self) -> bool {
        matches!(self, Self::NoConflict | Self::ConflictOverwrite)
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single decision applied to every unresolved conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverwriteDecision {
    /// Overwrite all conflicting files
    Accept,
    /// Keep all conflicting files
    Decline,
}

/// One pending source with its target path and state.
#[derive(Debug)]
pub struct PlannedItem {
    source: PendingSource,
    target: PathBuf,
    state: ItemState,
    overwrote: bool,
    failure: Option<Error>,
}

impl PlannedItem {
    fn new(source: PendingSource, target: PathBuf) -> Self {
        Self {
            source,
            target,
            state: ItemState::Pending,
            overwrote: false,
            failure: None,
        }
    }

    /// Returns the source.
    #[must_use]
    pub const fn source(&self) -> &PendingSource {
        &self.source
    }

    /// Returns the component file this item writes.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> ItemState {
        self.state
    }

    /// Returns `true` if the item was written over an existing file.
    #[must_use]
    pub const fn overwrote(&self) -> bool {
        self.overwrote
    }

    /// Returns the recorded failure, if the item failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    /// Moves the item to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if `next` is not reachable
    /// from the current state; the state is left unchanged.
    pub fn transition(&mut self, next: ItemState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                component: self.source.identity().component_name().to_string(),
                from: self.state.as_str(),
                to: next.as_str(),
            });
        }
        self.overwrote = self.state == ItemState::ConflictOverwrite && next == ItemState::Written;
        self.state = next;
        Ok(())
    }

    /// Marks the item as written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if the item was not actionable.
    pub fn mark_written(&mut self) -> Result<()> {
        self.transition(ItemState::Written)
    }

    /// Marks the item as failed with `error`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if the item was not actionable.
    pub fn mark_failed(&mut self, error: Error) -> Result<()> {
        self.transition(ItemState::Failed)?;
        self.failure = Some(error);
        Ok(())
    }
}

/// Planned writes for one run.
#[derive(Debug, Default)]
pub struct ConflictPlan {
    items: Vec<PlannedItem>,
}

impl ConflictPlan {
    /// Classifies every source against `components_dir`.
    ///
    /// With `reset` set (the directory was cleaned) every item is
    /// `NoConflict`. Otherwise an item whose target file exists is
    /// `ConflictUnresolved`.
    #[must_use]
    pub fn classify(
        sources: impl IntoIterator<Item = PendingSource>,
        components_dir: &Path,
        suffix: &str,
        reset: bool,
    ) -> Self {
        let items = sources
            .into_iter()
            .map(|source| {
                let target = components_dir.join(source.identity().file_name(suffix));
                let next = if !reset && target.exists() {
                    ItemState::ConflictUnresolved
                } else {
                    ItemState::NoConflict
                };
                let mut item = PlannedItem::new(source, target);
                // Pending reaches either classification.
                let _ = item.transition(next);
                item
            })
            .collect();

        Self { items }
    }

    /// Returns the items still awaiting a decision.
    pub fn conflicts(&self) -> impl Iterator<Item = &PlannedItem> {
        self.items
            .iter()
            .filter(|item| item.state == ItemState::ConflictUnresolved)
    }

    /// Returns `true` if any conflict awaits a decision.
    #[must_use]
    pub fn has_unresolved(&self) -> bool {
        self.conflicts().next().is_some()
    }

    /// Applies one decision to every unresolved conflict.
    pub fn resolve(&mut self, decision: OverwriteDecision) {
        let next = match decision {
            OverwriteDecision::Accept => ItemState::ConflictOverwrite,
            OverwriteDecision::Decline => ItemState::ConflictSkip,
        };
        for item in &mut self.items {
            if item.state == ItemState::ConflictUnresolved {
                let _ = item.transition(next);
            }
        }
    }

    /// Returns all items in input order.
    #[must_use]
    pub fn items(&self) -> &[PlannedItem] {
        &self.items
    }

    /// Returns all items mutably, for the execute phase.
    pub fn items_mut(&mut self) -> &mut [PlannedItem] {
        &mut self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the plan has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn count(&self, state: ItemState) -> usize {
        self.items.iter().filter(|item| item.state == state).count()
    }

    /// Items written to a path that did not hold a file before.
    #[must_use]
    pub fn generated(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.state == ItemState::Written && !item.overwrote)
            .count()
    }

    /// Items written over an existing file.
    #[must_use]
    pub fn overwritten(&self) -> usize {
        self.items.iter().filter(|item| item.overwrote).count()
    }

    /// Items that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(ItemState::Failed)
    }

    /// Items skipped because overwriting was declined.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(ItemState::ConflictSkip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::derive_identity;
    use std::fs;
    use tempfile::TempDir;

    fn source(label: &str) -> PendingSource {
        PendingSource::direct("<svg/>", derive_identity(label).unwrap())
    }

    fn dir_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            fs::write(dir.path().join(file), "existing").unwrap();
        }
        dir
    }

    #[test]
    fn test_classify_without_existing_files() {
        let dir = dir_with(&[]);
        let plan = ConflictPlan::classify(vec![source("a"), source("b")], dir.path(), "svelte", false);

        assert_eq!(plan.len(), 2);
        assert!(!plan.has_unresolved());
        assert!(plan.items().iter().all(|i| i.state() == ItemState::NoConflict));
        assert_eq!(plan.items()[0].target(), dir.path().join("A.svelte"));
    }

    #[test]
    fn test_classify_detects_existing_target() {
        let dir = dir_with(&["ArrowLeft.svelte"]);
        let plan = ConflictPlan::classify(
            vec![source("arrow-left"), source("arrow-right")],
            dir.path(),
            "svelte",
            false,
        );

        let conflicts: Vec<_> = plan.conflicts().collect();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].source().identity().component_name(), "ArrowLeft");
    }

    #[test]
    fn test_suffix_must_match_to_conflict() {
        let dir = dir_with(&["ArrowLeft.vue"]);
        let plan = ConflictPlan::classify(vec![source("arrow-left")], dir.path(), "svelte", false);
        assert!(!plan.has_unresolved());
    }

    #[test]
    fn test_reset_forces_no_conflict() {
        let dir = dir_with(&["ArrowLeft.svelte"]);
        let plan = ConflictPlan::classify(vec![source("arrow-left")], dir.path(), "svelte", true);
        assert_eq!(plan.items()[0].state(), ItemState::NoConflict);
    }

    #[test]
    fn test_resolve_accept_moves_all_conflicts() {
        let dir = dir_with(&["A.svelte", "B.svelte"]);
        let mut plan = ConflictPlan::classify(
            vec![source("a"), source("b"), source("c")],
            dir.path(),
            "svelte",
            false,
        );
        plan.resolve(OverwriteDecision::Accept);

        let states: Vec<_> = plan.items().iter().map(PlannedItem::state).collect();
        assert_eq!(
            states,
            [
                ItemState::ConflictOverwrite,
                ItemState::ConflictOverwrite,
                ItemState::NoConflict
            ]
        );
        assert!(!plan.has_unresolved());
    }

    #[test]
    fn test_resolve_decline_skips_all_conflicts() {
        let dir = dir_with(&["A.svelte", "B.svelte"]);
        let mut plan = ConflictPlan::classify(vec![source("a"), source("b")], dir.path(), "svelte", false);
        plan.resolve(OverwriteDecision::Decline);

        assert_eq!(plan.skipped(), 2);
        assert!(plan.items().iter().all(|i| i.state() == ItemState::ConflictSkip));
        assert!(plan.items().iter().all(|i| !i.state().is_actionable()));
    }

    #[test]
    fn test_execute_phase_counts() {
        let dir = dir_with(&["A.svelte", "B.svelte"]);
        let mut plan = ConflictPlan::classify(
            vec![source("a"), source("b"), source("c"), source("d")],
            dir.path(),
            "svelte",
            false,
        );
        plan.resolve(OverwriteDecision::Accept);

        let items = plan.items_mut();
        items[0].mark_written().unwrap();
        items[1]
            .mark_failed(Error::Render {
                message: "boom".to_string(),
            })
            .unwrap();
        items[2].mark_written().unwrap();
        items[3].mark_written().unwrap();

        assert_eq!(plan.overwritten(), 1);
        assert_eq!(plan.generated(), 2);
        assert_eq!(plan.failed(), 1);
        assert_eq!(plan.skipped(), 0);
        assert!(plan.items()[1].failure().is_some());
        assert!(plan.items()[0].overwrote());
        assert!(!plan.items()[2].overwrote());
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let dir = dir_with(&["A.svelte"]);
        let mut plan = ConflictPlan::classify(vec![source("a")], dir.path(), "svelte", false);

        let item = &mut plan.items_mut()[0];
        assert_eq!(item.state(), ItemState::ConflictUnresolved);

        let err = item.mark_written().unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { .. }));
        assert_eq!(item.state(), ItemState::ConflictUnresolved);

        item.transition(ItemState::ConflictSkip).unwrap();
        assert!(item.mark_written().is_err());
        assert!(item.transition(ItemState::ConflictOverwrite).is_err());
    }

    #[test]
    fn test_transition_table() {
        use ItemState::{ConflictOverwrite, ConflictSkip, ConflictUnresolved, Failed, NoConflict, Pending, Written};
        assert!(Pending.can_transition_to(NoConflict));
        assert!(Pending.can_transition_to(ConflictUnresolved));
        assert!(!Pending.can_transition_to(Written));
        assert!(ConflictUnresolved.can_transition_to(ConflictSkip));
        assert!(!NoConflict.can_transition_to(ConflictSkip));
        assert!(ConflictOverwrite.can_transition_to(Failed));
        assert!(!Written.can_transition_to(Failed));
        assert!(!Failed.can_transition_to(Written));
    }

    #[test]
    fn test_state_strings() {
        assert_eq!(ItemState::ConflictOverwrite.to_string(), "conflict-resolved-overwrite");
        assert_eq!(ItemState::ConflictSkip.as_str(), "conflict-resolved-skip");
    }
}
