//! Application layer: the reconciliation state machine.
//!
//! This module coordinates input state, query dispatch, and response
//! settlement. It implements the event-driven core of the engine with a
//! unidirectional data flow:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutation → Actions → Gateway
//!                            ↑                                       │
//!                            └────────── ResponseArrived ────────────┘
//! ```
//!
//! Every dispatched query carries a monotonic sequence number; a response
//! settles the view only if its number is the highest ever dispatched, which
//! eliminates the race between overlapping asynchronous fetches without
//! cancellation tokens or request de-duplication.
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and the staleness discard rule
//! - [`phase`]: Reconciliation phase state machine types
//! - [`state`]: Owned state container and view model exposure

pub mod actions;
pub mod handler;
pub mod phase;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use phase::Phase;
pub use state::EngineState;
