//! Integration tests for icon set merging, duplicate tracking, and planning.

use std::fs;
use svgicon_core::{
    BatchTracker, ConflictPlan, IconIdentity, IconSet, ItemState, OverwriteDecision, PendingSource,
    derive_identity, recover_base_name,
};
use tempfile::TempDir;

fn ids(labels: &[&str]) -> Vec<IconIdentity> {
    labels
        .iter()
        .map(|label| derive_identity(label).unwrap())
        .collect()
}

#[test]
fn test_round_trip_for_plain_labels() {
    for label in ["my-icon.svg", "arrow-left", "logo-main.SVG", "a1-b2", "x"] {
        let identity = derive_identity(label).unwrap();
        assert_eq!(
            recover_base_name(identity.component_name()).as_deref(),
            Some(identity.base_name()),
            "label {label}"
        );
    }
}

#[test]
fn test_underivable_labels() {
    for label in ["", ".svg", "---", "  ", "%%%.svg"] {
        assert!(derive_identity(label).is_none(), "label {label:?}");
    }
}

#[test]
fn test_merge_with_empty_side_is_sorted_input() {
    let x = ids(&["zebra", "apple", "mango"]);
    let mut sorted = x.clone();
    sorted.sort();

    assert_eq!(IconSet::merge(x.clone(), Vec::new()).into_vec(), sorted);
    assert_eq!(IconSet::merge(Vec::new(), x).into_vec(), sorted);
}

#[test]
fn test_merge_is_order_independent() {
    let a = IconSet::merge(ids(&["c", "a"]), ids(&["b"]));
    let b = IconSet::merge(ids(&["a", "c"]), ids(&["b"]));
    assert_eq!(a, b);
    assert_eq!(a.base_names(), ["a", "b", "c"]);
}

#[test]
fn test_merge_same_identity_yields_one_entry() {
    let set = IconSet::merge(ids(&["old"]), ids(&["old"]));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_merge_incoming_wins_on_component_collision() {
    let scanned = IconIdentity::from_component_name("MyIcon").unwrap();
    let fresh = derive_identity("my_icon").unwrap();
    assert_eq!(scanned.component_name(), fresh.component_name());

    let set = IconSet::merge(vec![scanned], vec![fresh.clone()]);
    assert_eq!(set.into_vec(), vec![fresh]);
}

#[test]
fn test_scanned_components_regenerate_expected_names() {
    let existing: Vec<IconIdentity> = ["LogoMain", "ArrowLeft"]
        .iter()
        .filter_map(|name| IconIdentity::from_component_name(name))
        .collect();

    let set = IconSet::from_identities(existing);
    let pairs: Vec<(&str, &str)> = set
        .iter()
        .map(|id| (id.base_name(), id.component_name()))
        .collect();
    assert_eq!(
        pairs,
        [("arrow-left", "ArrowLeft"), ("logo-main", "LogoMain")]
    );
}

#[test]
fn test_batch_rejects_second_occurrence() {
    let first = PendingSource::direct("<svg/>", derive_identity("My Icon.svg").unwrap());
    let second = PendingSource::direct("<svg/>", derive_identity("my_icon.svg").unwrap());

    let mut tracker = BatchTracker::new();
    tracker.check(&first).unwrap();
    tracker.record(first.identity().clone());

    let err = tracker.check(&second).unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_declined_conflict_keeps_file_and_existing_icon() {
    let dir = TempDir::new().unwrap();
    let existing = dir.path().join("Star.svelte");
    fs::write(&existing, "original").unwrap();

    let sources = vec![
        PendingSource::direct("<svg/>", derive_identity("star").unwrap()),
        PendingSource::direct("<svg/>", derive_identity("moon").unwrap()),
    ];
    let mut plan = ConflictPlan::classify(sources, dir.path(), "svelte", false);
    assert!(plan.has_unresolved());

    plan.resolve(OverwriteDecision::Decline);
    let states: Vec<ItemState> = plan.items().iter().map(|item| item.state()).collect();
    assert_eq!(states, [ItemState::ConflictSkip, ItemState::NoConflict]);

    let mut tracker = BatchTracker::new();
    for item in plan.items_mut() {
        if item.state().is_actionable() {
            fs::write(item.target(), "generated").unwrap();
            tracker.record(item.source().identity().clone());
            item.mark_written().unwrap();
        }
    }

    assert_eq!(fs::read_to_string(&existing).unwrap(), "original");
    assert_eq!(plan.skipped(), 1);
    assert_eq!(plan.generated(), 1);

    let scanned = ["Star", "Moon"]
        .iter()
        .filter_map(|name| IconIdentity::from_component_name(name));
    let set = IconSet::merge(scanned, tracker.into_identities());
    assert_eq!(set.base_names(), ["moon", "star"]);
}
