//! Response protocol between spawned gateway calls and the session.
//!
//! Each dispatched search runs as its own task; when it completes it sends
//! one envelope back over the session channel. The envelope re-associates
//! the gateway outcome with the sequence number of the originating
//! dispatch, which is all the reconciler needs to accept or discard it.

use crate::domain::error::Result;
use crate::gateway::models::IndexResponse;

/// Completion notice for one dispatched search.
#[derive(Debug)]
pub struct ResponseEnvelope {
    /// Sequence number of the dispatch this outcome belongs to.
    pub sequence: u64,
    /// The gateway outcome, success or failure.
    pub outcome: Result<IndexResponse>,
}
