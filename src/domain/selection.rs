//! Multi-select facet selection state.
//!
//! This module defines [`FacetSelection`], the ordered mapping from facet key
//! to the set of option values the user has checked, together with the three
//! operations the rest of the engine needs: toggling a value, serializing the
//! selection into filter expressions, and membership testing for checkbox
//! state.
//!
//! # Invariants
//!
//! - A key present in the selection always has a non-empty value set. The
//!   moment a toggle empties a set, the key is removed entirely, so no
//!   serialization can ever emit an empty expression.
//! - Insertion order of keys and of values within a key is preserved, which
//!   makes [`FacetSelection::filter_expressions`] deterministic across calls.
//! - [`FacetSelection::toggle`] never mutates the snapshot it is called on; it
//!   returns a new value. Previously returned snapshots stay valid for
//!   sharing, memoization, and equality-based change detection.

use serde::{Deserialize, Serialize};

/// One facet's selected values, in the order they were checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SelectionGroup {
    key: String,
    values: Vec<String>,
}

/// Ordered mapping from facet key to the selected option values.
///
/// Keys are opaque raw index field paths (e.g. `fields.category.en-US`);
/// values are opaque option strings. Neither is interpreted here — title
/// extraction happens at projection time, and the index interprets the
/// serialized expressions.
///
/// # Example
///
/// ```
/// use facetizer::domain::FacetSelection;
///
/// let selection = FacetSelection::new()
///     .toggle("fields.category.en-US", "tech")
///     .toggle("fields.category.en-US", "life");
///
/// assert!(selection.is_selected("fields.category.en-US", "tech"));
/// assert_eq!(
///     selection.filter_expressions(),
///     vec!["fields.category.en-US:tech,life".to_string()],
/// );
///
/// // Toggling an already-selected value removes it again.
/// let selection = selection.toggle("fields.category.en-US", "tech");
/// assert_eq!(
///     selection.filter_expressions(),
///     vec!["fields.category.en-US:life".to_string()],
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    groups: Vec<SelectionGroup>,
}

impl FacetSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new snapshot with `value` toggled under `key`.
    ///
    /// If `key` is absent it is created with a singleton set. If `value` is
    /// not yet a member it is appended last, preserving the existing order.
    /// If `value` is already a member it is removed, and a key whose set
    /// becomes empty is deleted entirely. Toggling an unknown key is valid —
    /// no pre-registration of facets is required.
    ///
    /// Toggling the same value twice round-trips back to an equal snapshot.
    #[must_use]
    pub fn toggle(&self, key: &str, value: &str) -> Self {
        let mut groups = self.groups.clone();

        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => {
                if let Some(position) = group.values.iter().position(|v| v == value) {
                    group.values.remove(position);
                } else {
                    group.values.push(value.to_string());
                }
            }
            None => groups.push(SelectionGroup {
                key: key.to_string(),
                values: vec![value.to_string()],
            }),
        }

        // Empty sets must never survive a toggle.
        groups.retain(|group| !group.values.is_empty());

        Self { groups }
    }

    /// Serializes the selection into one filter expression per facet.
    ///
    /// Each expression has the shape `"key:value1,value2"` with keys in the
    /// order they were first selected and values in the order they were
    /// checked. Repeated calls on the same snapshot produce an identical
    /// sequence. Empty expressions cannot occur (see module invariants).
    #[must_use]
    pub fn filter_expressions(&self) -> Vec<String> {
        self.groups
            .iter()
            .map(|group| format!("{}:{}", group.key, group.values.join(",")))
            .collect()
    }

    /// Returns whether `value` is currently selected under `key`.
    ///
    /// Used for checkbox state in controlled inputs. Absent keys report
    /// `false`.
    #[must_use]
    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.groups
            .iter()
            .find(|group| group.key == key)
            .is_some_and(|group| group.values.iter().any(|v| v == value))
    }

    /// Returns whether no facet value is selected at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of facet keys with at least one selected value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORY: &str = "fields.category.en-US";
    const AUTHORS: &str = "fields.authors.en-US";

    #[test]
    fn toggle_creates_unknown_key_on_demand() {
        let selection = FacetSelection::new().toggle(CATEGORY, "tech");
        assert!(selection.is_selected(CATEGORY, "tech"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_twice_round_trips_to_original() {
        let original = FacetSelection::new().toggle(AUTHORS, "ana");
        let toggled = original.toggle(CATEGORY, "tech").toggle(CATEGORY, "tech");
        assert_eq!(toggled, original);
    }

    #[test]
    fn toggle_never_mutates_the_receiver() {
        let first = FacetSelection::new().toggle(CATEGORY, "tech");
        let _second = first.toggle(CATEGORY, "life");
        assert_eq!(
            first.filter_expressions(),
            vec![format!("{CATEGORY}:tech")],
        );
    }

    #[test]
    fn removal_deletes_emptied_key() {
        let selection = FacetSelection::new()
            .toggle(CATEGORY, "tech")
            .toggle(CATEGORY, "tech");
        assert!(selection.is_empty());
        assert!(selection.filter_expressions().is_empty());
    }

    /// Toggle tech, then life, then tech again: only life remains.
    #[test]
    fn toggle_sequence_keeps_remaining_values() {
        let selection = FacetSelection::new()
            .toggle(CATEGORY, "tech")
            .toggle(CATEGORY, "life")
            .toggle(CATEGORY, "tech");
        assert_eq!(
            selection.filter_expressions(),
            vec![format!("{CATEGORY}:life")],
        );
    }

    #[test]
    fn single_value_serializes_without_trailing_comma() {
        let selection = FacetSelection::new().toggle(CATEGORY, "tech");
        assert_eq!(
            selection.filter_expressions(),
            vec![format!("{CATEGORY}:tech")],
        );
    }

    #[test]
    fn serialization_preserves_insertion_order() {
        let selection = FacetSelection::new()
            .toggle(AUTHORS, "ben")
            .toggle(CATEGORY, "tech")
            .toggle(AUTHORS, "ana");
        assert_eq!(
            selection.filter_expressions(),
            vec![
                format!("{AUTHORS}:ben,ana"),
                format!("{CATEGORY}:tech"),
            ],
        );
    }

    #[test]
    fn serialization_is_deterministic_across_calls() {
        let selection = FacetSelection::new()
            .toggle(CATEGORY, "tech")
            .toggle(AUTHORS, "ana");
        assert_eq!(selection.filter_expressions(), selection.filter_expressions());
    }

    #[test]
    fn no_reachable_state_contains_an_empty_set() {
        // Walk a churn of toggles and check the invariant after every step.
        let steps = [
            (CATEGORY, "tech"),
            (CATEGORY, "life"),
            (AUTHORS, "ana"),
            (CATEGORY, "tech"),
            (CATEGORY, "life"),
            (AUTHORS, "ana"),
            (AUTHORS, "ben"),
        ];

        let mut selection = FacetSelection::new();
        for (key, value) in steps {
            selection = selection.toggle(key, value);
            for expression in selection.filter_expressions() {
                let (_, values) = expression.rsplit_once(':').expect("key:values shape");
                assert!(!values.is_empty(), "empty set leaked into {expression:?}");
            }
        }
    }

    #[test]
    fn is_selected_reports_false_for_absent_key() {
        let selection = FacetSelection::new().toggle(CATEGORY, "tech");
        assert!(!selection.is_selected(AUTHORS, "ana"));
        assert!(!selection.is_selected(CATEGORY, "life"));
    }
}
