//! Query composition.
//!
//! This module derives a normalized [`QueryRequest`] from the current input
//! state: the free-text query, the serialized facet filter expressions, and
//! the sequence number the reconciler tagged the dispatch with. Composition is
//! a pure function — no I/O, no trimming, no sanitization (the index owns
//! text normalization).

use crate::domain::selection::FacetSelection;
use serde::{Deserialize, Serialize};

/// Immutable request value handed to the search gateway.
///
/// Created once per dispatch and discarded after reconciliation. The
/// `sequence` field is the monotonic dispatch counter used to detect and
/// discard stale responses; the gateway itself never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Raw free-text query, passed through exactly as the user typed it.
    pub free_text: String,
    /// One `"key:value1,value2"` expression per selected facet, in selection
    /// order. Empty when no facet value is selected.
    pub filter_expressions: Vec<String>,
    /// Monotonic sequence number assigned at dispatch time.
    pub sequence: u64,
}

/// Composes a [`QueryRequest`] from the current input state.
///
/// The free text is not trimmed or otherwise altered, and the filter
/// expressions come straight from [`FacetSelection::filter_expressions`], so
/// composing twice from the same inputs yields equal requests.
#[must_use]
pub fn compose(free_text: &str, selection: &FacetSelection, sequence: u64) -> QueryRequest {
    QueryRequest {
        free_text: free_text.to_string(),
        filter_expressions: selection.filter_expressions(),
        sequence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An empty selection and free text "react" compose to a
    /// request with no filter expressions.
    #[test]
    fn empty_selection_composes_bare_text_request() {
        let request = compose("react", &FacetSelection::new(), 1);
        assert_eq!(request.free_text, "react");
        assert!(request.filter_expressions.is_empty());
        assert_eq!(request.sequence, 1);
    }

    #[test]
    fn selection_expressions_are_carried_verbatim() {
        let selection = FacetSelection::new()
            .toggle("fields.category.en-US", "tech")
            .toggle("fields.authors.en-US", "ana");
        let request = compose("", &selection, 7);
        assert_eq!(
            request.filter_expressions,
            vec![
                "fields.category.en-US:tech".to_string(),
                "fields.authors.en-US:ana".to_string(),
            ],
        );
    }

    #[test]
    fn free_text_is_not_trimmed() {
        let request = compose("  react \n", &FacetSelection::new(), 3);
        assert_eq!(request.free_text, "  react \n");
    }
}
