//! Actions representing side effects requested by the event handler.
//!
//! The handler never performs I/O itself. After each event it returns the
//! side effects the driving shell must execute; today that is a single kind
//! of effect, dispatching a composed query through the gateway. Keeping the
//! boundary explicit keeps every transition in
//! [`handle_event`](crate::app::handle_event) synchronously testable.

use crate::domain::query::QueryRequest;

/// A side effect to be executed by the shell driving the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Execute this request through the search gateway and feed the outcome
    /// back as [`Event::ResponseArrived`](crate::app::Event::ResponseArrived)
    /// tagged with the request's sequence number.
    ///
    /// Dispatches must not wait for earlier ones to finish; overlapping
    /// in-flight requests are expected and are never cancelled.
    Dispatch(QueryRequest),
}
