//! Structured logging for the engine.
//!
//! All instrumentation goes through `tracing`: dispatches and settlements at
//! debug, stale discards at debug, transport failures and malformed facet
//! keys at warn. This module only wires up a subscriber for shells that do
//! not bring their own.

pub mod init;

pub use init::init_tracing;
