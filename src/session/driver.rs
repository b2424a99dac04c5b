//! Async search session driving the engine against a gateway.
//!
//! [`SearchSession`] is the convenience wrapper most shells want: it owns an
//! [`EngineState`], a [`SearchGateway`], and the response channel, and wires
//! them together. Input entry points run the event handler synchronously and
//! spawn one tokio task per emitted dispatch; completions are drained back
//! into the engine through [`pump`](SearchSession::pump),
//! [`process_next`](SearchSession::process_next), or
//! [`settled`](SearchSession::settled).
//!
//! In-flight requests are never cancelled. A superseded request simply
//! resolves later and its envelope is discarded by the handler's staleness
//! rule, whatever order the tasks finish in.
//!
//! The session must live inside a tokio runtime; entry points that dispatch
//! will panic outside one, as `tokio::spawn` does.

use crate::app::{handle_event, Action, EngineState, Event, Phase};
use crate::domain::selection::FacetSelection;
use crate::gateway::backend::SearchGateway;
use crate::gateway::models::SearchOptions;
use crate::session::messages::ResponseEnvelope;
use crate::ui::projector::ViewProjector;
use crate::ui::viewmodel::SearchViewModel;
use std::sync::Arc;
use tokio::sync::mpsc;

/// One interactive faceted-search session.
pub struct SearchSession<G> {
    state: EngineState,
    gateway: Arc<G>,
    request_all_facets: bool,
    tx: mpsc::UnboundedSender<ResponseEnvelope>,
    rx: mpsc::UnboundedReceiver<ResponseEnvelope>,
}

impl<G: SearchGateway + 'static> SearchSession<G> {
    /// Creates an idle session over `gateway` with default projection.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self::with_projector(gateway, ViewProjector::default())
    }

    /// Creates an idle session with an explicit projector, e.g. built from
    /// [`IndexConfig::field_pattern`](crate::gateway::IndexConfig).
    #[must_use]
    pub fn with_projector(gateway: G, projector: ViewProjector) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: EngineState::new(projector),
            gateway: Arc::new(gateway),
            request_all_facets: true,
            tx,
            rx,
        }
    }

    /// Sets whether dispatches ask the index for the full facet catalog.
    #[must_use]
    pub fn request_all_facets(mut self, request_all_facets: bool) -> Self {
        self.request_all_facets = request_all_facets;
        self
    }

    /// Entry point for the search input: replaces the free text and
    /// dispatches.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let actions = handle_event(
            &mut self.state,
            Event::SearchTextChanged { text: text.into() },
        );
        self.run(actions);
    }

    /// Entry point for a facet checkbox: toggles the value and dispatches.
    pub fn toggle_facet(&mut self, key: &str, value: &str) {
        let actions = handle_event(
            &mut self.state,
            Event::FacetToggled {
                key: key.to_string(),
                value: value.to_string(),
            },
        );
        self.run(actions);
    }

    /// Re-dispatches with the current inputs: the initial fetch on startup
    /// and the retry path after a failure.
    pub fn refresh(&mut self) {
        let actions = handle_event(&mut self.state, Event::Refresh);
        self.run(actions);
    }

    /// Current free-text value, for controlled-input binding.
    #[must_use]
    pub fn search_text(&self) -> &str {
        self.state.search_text()
    }

    /// Current selection snapshot, for controlled-input binding.
    #[must_use]
    pub fn selection(&self) -> &FacetSelection {
        self.state.selection()
    }

    /// Checkbox state for `value` under `key`.
    #[must_use]
    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.state.is_selected(key, value)
    }

    /// The view to present right now (latest settled data + loading flag).
    #[must_use]
    pub fn viewmodel(&self) -> SearchViewModel {
        self.state.viewmodel()
    }

    /// Applies every completion that has already arrived, without waiting.
    ///
    /// Returns the number of envelopes applied (settled or discarded).
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(envelope) = self.rx.try_recv() {
            self.apply(envelope);
            applied += 1;
        }
        applied
    }

    /// Waits for one completion and applies it.
    ///
    /// Returns `false` if the channel has closed, which cannot happen while
    /// the session is alive.
    pub async fn process_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(envelope) => {
                self.apply(envelope);
                true
            }
            None => false,
        }
    }

    /// Drains completions until the newest dispatch has settled, then
    /// returns the settled view.
    ///
    /// Returns immediately when nothing is pending. Stale envelopes consumed
    /// along the way are discarded as usual.
    pub async fn settled(&mut self) -> SearchViewModel {
        while matches!(self.state.phase(), Phase::Pending { .. }) {
            if !self.process_next().await {
                break;
            }
        }
        self.state.viewmodel()
    }

    fn apply(&mut self, envelope: ResponseEnvelope) {
        let actions = handle_event(
            &mut self.state,
            Event::ResponseArrived {
                sequence: envelope.sequence,
                outcome: envelope.outcome,
            },
        );
        self.run(actions);
    }

    fn run(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Dispatch(request) => {
                    let sequence = request.sequence;
                    let options = SearchOptions {
                        filter_expressions: request.filter_expressions.clone(),
                        request_all_facets: self.request_all_facets,
                    };
                    let future = self.gateway.search(request.free_text, options);
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let outcome = future.await;
                        let _ = tx.send(ResponseEnvelope { sequence, outcome });
                    });
                }
            }
        }
    }
}
