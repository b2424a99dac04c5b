//! Search gateway abstraction.
//!
//! This module defines the [`SearchGateway`] trait that abstracts over the
//! remote search index. The trait is a pure request/response boundary: one
//! asynchronous call, no retries, no caching, no deduplication — sequencing
//! discipline lives entirely in the reconciler.
//!
//! # Failure contract
//!
//! Any transport or protocol failure (timeout, malformed payload,
//! non-success response) surfaces as the `Err` variant of the returned
//! future's output. Implementations must never panic across this boundary;
//! callers handle both variants explicitly.

use crate::domain::error::Result;
use crate::gateway::models::{IndexResponse, SearchOptions};
use futures_util::future::BoxFuture;

/// Abstraction over the remote search index.
///
/// Implementations take the raw free text plus [`SearchOptions`] and resolve
/// to either an [`IndexResponse`] or an error description. The sequence
/// number of the originating dispatch is deliberately absent from this
/// signature — it is reconciler bookkeeping, and the gateway must stay
/// oblivious to it.
///
/// # Implementations
///
/// - [`MemoryIndex`](crate::gateway::MemoryIndex): in-process fixture index
///   over a fixed corpus, for tests and demo shells.
pub trait SearchGateway: Send + Sync {
    /// Executes one search against the index.
    ///
    /// May suspend for an unbounded but practically-bounded network round
    /// trip. Does not retry internally; re-dispatching is the caller's
    /// responsibility and naturally acquires a fresh sequence number.
    fn search(
        &self,
        query_text: String,
        options: SearchOptions,
    ) -> BoxFuture<'static, Result<IndexResponse>>;
}
