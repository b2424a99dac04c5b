//! Async bridge between the engine and a search gateway.
//!
//! The application layer is synchronous and side-effect free; this module
//! supplies the asynchronous plumbing around it. Each dispatch becomes a
//! spawned task, each completion a [`ResponseEnvelope`] on the session
//! channel, and the reconciler decides on arrival whether it still matters.
//!
//! # Modules
//!
//! - `messages`: Completion envelope protocol
//! - `driver`: [`SearchSession`], the gateway-owning convenience wrapper

pub mod driver;
pub mod messages;

pub use driver::SearchSession;
pub use messages::ResponseEnvelope;
