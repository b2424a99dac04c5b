//! Event handling and reconciliation transitions.
//!
//! This module implements the core event handler: user input and gateway
//! responses arrive as [`Event`]s, [`handle_event`] mutates the
//! [`EngineState`] and returns the [`Action`]s the shell must execute.
//!
//! # Staleness rule
//!
//! The one correctness guarantee everything else hangs on: a response whose
//! sequence number is not the highest ever dispatched is discarded
//! unconditionally, so a slow early request can never overwrite the result
//! of a faster later one. No cancellation of in-flight requests is needed —
//! superseded responses are simply dropped on arrival. An implementation
//! driving this engine may still cancel as an optimization; observable
//! behavior does not change.

use crate::app::actions::Action;
use crate::app::state::EngineState;
use crate::domain::error::Result;
use crate::gateway::models::IndexResponse;
use crate::ui::viewmodel::SearchViewModel;

/// Inputs the engine reacts to.
///
/// The first three originate from the UI shell; `ResponseArrived` re-enters
/// from the gateway dispatch the shell executed for an earlier
/// [`Action::Dispatch`].
#[derive(Debug)]
pub enum Event {
    /// The free-text query changed (controlled input).
    SearchTextChanged {
        /// New raw text, used verbatim.
        text: String,
    },

    /// A facet checkbox was toggled.
    FacetToggled {
        /// Raw facet key (index field path).
        key: String,
        /// Option value that was checked or unchecked.
        value: String,
    },

    /// Re-dispatch with the current inputs unchanged.
    ///
    /// Used for the initial fetch on startup and as the retry path after a
    /// failure: re-dispatching acquires a fresh sequence number, so a stale
    /// retry can never mask newer input.
    Refresh,

    /// A gateway call completed, successfully or not.
    ResponseArrived {
        /// Sequence number of the originating dispatch.
        sequence: u64,
        /// The gateway outcome for that dispatch.
        outcome: Result<IndexResponse>,
    },
}

/// Processes one event, returning the side effects to execute.
///
/// Input events (`SearchTextChanged`, `FacetToggled`, `Refresh`) mutate the
/// inputs, move the engine to `Pending` under a fresh sequence number, and
/// emit a single [`Action::Dispatch`]. `ResponseArrived` either settles the
/// view (current sequence) or is discarded (stale); it never emits actions.
pub fn handle_event(state: &mut EngineState, event: Event) -> Vec<Action> {
    match event {
        Event::SearchTextChanged { text } => {
            state.set_search_text(text);
            dispatch(state)
        }
        Event::FacetToggled { key, value } => {
            state.toggle_selection(&key, &value);
            dispatch(state)
        }
        Event::Refresh => dispatch(state),
        Event::ResponseArrived { sequence, outcome } => {
            settle(state, sequence, outcome);
            vec![]
        }
    }
}

fn dispatch(state: &mut EngineState) -> Vec<Action> {
    vec![Action::Dispatch(state.begin_dispatch())]
}

fn settle(state: &mut EngineState, sequence: u64, outcome: Result<IndexResponse>) {
    if sequence < state.last_dispatched() {
        tracing::debug!(
            sequence,
            current = state.last_dispatched(),
            "discarding stale response"
        );
        return;
    }
    if sequence > state.last_dispatched() {
        // Cannot happen with this crate's dispatcher; an external envelope
        // with an unknown sequence is not trustworthy enough to settle on.
        tracing::warn!(
            sequence,
            current = state.last_dispatched(),
            "discarding response beyond dispatch high-water mark"
        );
        return;
    }

    let view = match outcome {
        Ok(response) => state.projector().project(&response),
        Err(error) => {
            tracing::warn!(sequence, error = %error, "search failed; settling empty view");
            SearchViewModel::failed(error.to_string())
        }
    };

    tracing::debug!(
        sequence,
        hits = view.hits.len(),
        facets = view.facets.len(),
        failed = view.error.is_some(),
        "response settled"
    );
    state.settle(sequence, view);
}
