//! Reconciliation phase state machine types.
//!
//! The engine is always in exactly one of three phases. The phase tracks
//! dispatch/settlement bookkeeping only; the displayed data lives in the
//! state container's last settled view, which survives phase transitions
//! (stale-while-revalidate).

/// Where the engine stands between dispatches and settlements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been dispatched yet. The exposed view is the empty
    /// startup view.
    #[default]
    Idle,

    /// A dispatch is in flight and no response for it has settled yet.
    ///
    /// The exposed view is the previous settled view with the loading flag
    /// raised — never a blank flash, unless nothing has ever settled.
    Pending {
        /// Sequence number of the newest dispatch.
        sequence: u64,
    },

    /// The newest dispatch has settled, successfully or not.
    Settled {
        /// Sequence number the current view was settled for.
        sequence: u64,
    },
}

impl Phase {
    /// Whether a dispatch newer than the displayed data is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}
