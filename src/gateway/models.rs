//! Wire shapes of the external search index contract.
//!
//! These types mirror the `search(queryText, options) -> {hits, facets}`
//! boundary of the remote index. They are kept separate from the display
//! types in [`crate::ui::viewmodel`]: the engine passes hits through opaquely
//! and only the projector reshapes them for presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options accompanying a gateway search call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Serialized facet filter expressions, one `"key:v1,v2"` per facet.
    pub filter_expressions: Vec<String>,
    /// Whether the index should return the full facet catalog alongside the
    /// hits (the index's `facets: ['*']`-style option). Populated from
    /// [`crate::gateway::IndexConfig`], not per keystroke.
    pub request_all_facets: bool,
}

/// One raw post record as returned by the index.
///
/// Opaque pass-through: the engine never mutates these fields. Formatting
/// (date rendering, category casing) happens in the projector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHit {
    /// Index object identifier.
    pub id: String,
    /// Post title.
    pub title: String,
    /// Post category, as stored (lowercase in the source corpus).
    pub category: String,
    /// Link target for the post card.
    pub slug: String,
    /// Publish timestamp, UTC.
    pub publish_date: DateTime<Utc>,
    /// Author display names, in byline order.
    pub authors: Vec<String>,
}

/// Per-option match count for one facet dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    /// The selectable option value.
    pub value: String,
    /// Number of matching records for this option.
    pub count: u64,
}

/// One facet dimension's option counts, keyed by the raw index field path.
///
/// Whether counts reflect the current filter selection or the unfiltered
/// corpus is determined by the index. [`crate::gateway::MemoryIndex`]
/// computes them post-filter, over the result set of the current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    /// Raw facet key, e.g. `fields.category.en-US`.
    pub key: String,
    /// Option values and their counts, in index order.
    pub options: Vec<FacetCount>,
}

/// Successful index response: hits plus the facet catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexResponse {
    /// Matching records in index ranking order.
    pub hits: Vec<RawHit>,
    /// Facet catalog with counts, in index order.
    pub facets: Vec<FacetCounts>,
}

impl Default for RawHit {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            category: String::new(),
            slug: String::new(),
            publish_date: DateTime::<Utc>::UNIX_EPOCH,
            authors: vec![],
        }
    }
}
