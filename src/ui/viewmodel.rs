//! View model types representing renderable search state.
//!
//! This module defines the immutable display model computed from settled
//! index responses, following the MVVM split: view models contain no
//! business logic, only display-ready data. They are serde-serializable so
//! shells that render out of process can ship them over a channel as-is.
//!
//! The engine exposes exactly one [`SearchViewModel`] at a time — the latest
//! settled one — with `loading` set while a newer dispatch is still in
//! flight (stale-while-revalidate).

use serde::{Deserialize, Serialize};

/// Complete display model for the faceted search UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchViewModel {
    /// `true` while a dispatch newer than the displayed data is in flight.
    pub loading: bool,
    /// Post cards for the current result set, in index ranking order.
    pub hits: Vec<PostCard>,
    /// Facet catalog with display titles and counts, in index order.
    pub facets: Vec<FacetGroup>,
    /// Human-readable failure description when the latest settled dispatch
    /// did not complete. `None` on success — a legitimately empty result set
    /// and a failed fetch are otherwise indistinguishable here.
    pub error: Option<String>,
}

impl SearchViewModel {
    /// The startup view: nothing loaded, nothing loading, no error.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Empty view for a failed fetch, with the description surfaced.
    #[must_use]
    pub fn failed(description: impl Into<String>) -> Self {
        Self {
            error: Some(description.into()),
            ..Self::default()
        }
    }
}

/// One post result, formatted for display.
///
/// Produced by the projector from a raw index hit: the publish date is
/// rendered in long form and the category is upper-cased. Everything else is
/// passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCard {
    /// Index object identifier, usable as a render key.
    pub id: String,
    /// Post title, verbatim.
    pub title: String,
    /// Category label, upper-cased for the card badge.
    pub category: String,
    /// Link target, verbatim.
    pub slug: String,
    /// Publish date formatted as "Month DD, YYYY".
    pub display_date: String,
    /// Author names in byline order, verbatim.
    pub authors: Vec<String>,
}

/// One facet dimension with its display title and option counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetGroup {
    /// Raw index field path, the key used for toggling and serialization.
    pub key: String,
    /// Upper-cased human title extracted from the key.
    pub title: String,
    /// Selectable options with their counts, in index order.
    pub options: Vec<FacetOption>,
}

/// One checkbox row within a facet group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    /// The option value, as toggled and serialized.
    pub value: String,
    /// Number of matching records reported by the index.
    pub count: u64,
}
