//! Central engine state container and view model exposure.
//!
//! This module defines [`EngineState`], the single owned state object the
//! event handler operates on: the controlled-input values (free text and
//! facet selection), the monotonic dispatch counter, the reconciliation
//! [`Phase`], and the last settled view model.
//!
//! # Ownership
//!
//! The state is owned exclusively by whichever loop drives the event
//! handler and is updated synchronously on each event. There is no parallel
//! mutation and therefore no locking; concurrency exists only as multiple
//! dispatched gateway calls in flight, which re-enter through
//! [`Event::ResponseArrived`](crate::app::Event::ResponseArrived).

use crate::app::phase::Phase;
use crate::domain::query::{self, QueryRequest};
use crate::domain::selection::FacetSelection;
use crate::ui::projector::ViewProjector;
use crate::ui::viewmodel::SearchViewModel;

/// Owned state of the faceted search engine.
#[derive(Debug, Default)]
pub struct EngineState {
    /// Current free-text query, bound to the search input.
    search_text: String,
    /// Current facet selection snapshot, bound to the checkboxes.
    selection: FacetSelection,
    /// Highest sequence number ever dispatched. `0` means none.
    last_dispatched: u64,
    /// Reconciliation phase.
    phase: Phase,
    /// Most recent settled view. Shown while a newer dispatch is pending.
    settled_view: SearchViewModel,
    /// Projector applied to accepted responses.
    projector: ViewProjector,
}

impl EngineState {
    /// Creates an idle engine with an empty view.
    #[must_use]
    pub fn new(projector: ViewProjector) -> Self {
        Self {
            projector,
            ..Self::default()
        }
    }

    /// Current free-text value, for controlled-input binding.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Current selection snapshot, for controlled-input binding.
    #[must_use]
    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    /// Checkbox state: whether `value` is selected under `key`.
    #[must_use]
    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.selection.is_selected(key, value)
    }

    /// Current reconciliation phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The view to present right now.
    ///
    /// Always derived from the response with the highest sequence number
    /// that has settled so far, with `loading` raised while a newer dispatch
    /// is in flight.
    #[must_use]
    pub fn viewmodel(&self) -> SearchViewModel {
        SearchViewModel {
            loading: self.phase.is_loading(),
            ..self.settled_view.clone()
        }
    }

    pub(crate) fn set_search_text(&mut self, text: String) {
        self.search_text = text;
    }

    pub(crate) fn toggle_selection(&mut self, key: &str, value: &str) {
        self.selection = self.selection.toggle(key, value);
    }

    /// Assigns the next sequence number, composes the request for the
    /// current inputs, and moves to `Pending`.
    pub(crate) fn begin_dispatch(&mut self) -> QueryRequest {
        self.last_dispatched += 1;
        let sequence = self.last_dispatched;
        self.phase = Phase::Pending { sequence };

        tracing::debug!(
            sequence,
            text_len = self.search_text.len(),
            facet_keys = self.selection.len(),
            "dispatching search"
        );

        query::compose(&self.search_text, &self.selection, sequence)
    }

    /// Whether `sequence` is the highest ever dispatched.
    pub(crate) fn is_current(&self, sequence: u64) -> bool {
        sequence == self.last_dispatched
    }

    /// Highest sequence number ever dispatched.
    pub(crate) fn last_dispatched(&self) -> u64 {
        self.last_dispatched
    }

    /// Settles the current sequence with an already-projected view.
    pub(crate) fn settle(&mut self, sequence: u64, view: SearchViewModel) {
        self.settled_view = view;
        self.phase = Phase::Settled { sequence };
    }

    pub(crate) fn projector(&self) -> &ViewProjector {
        &self.projector
    }
}
