//! Facetizer: a faceted search state and query synchronization engine.
//!
//! Facetizer is the core of an interactive faceted-search front end: the
//! user types a free-text query and toggles multi-valued facet checkboxes,
//! and the engine keeps the filter state consistent, serializes it into
//! search requests, issues asynchronous lookups against a remote index, and
//! reconciles the results back into a display model — guaranteeing that the
//! displayed result set always corresponds to the most recent input, never
//! to a slower, older request.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Shell (not part of this crate)                  │  ← rendering, input
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session Layer (session/)                           │  ← tokio dispatch
//! │  - One task per query, completion envelopes         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← state machine
//! │  - Event handling, sequence numbering               │
//! │  - Stale-response discard, view settlement          │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Domain Layer  │   │ Gateway Layer │   │ UI Layer      │
//! │ (domain/)     │   │ (gateway/)    │   │ (ui/)         │
//! │ - Selection   │   │ - Index trait │   │ - View models │
//! │ - Composition │   │ - Wire shapes │   │ - Projection  │
//! │ - Errors      │   │ - Config      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//! ```
//!
//! # The staleness guarantee
//!
//! Every input change increments a monotonic sequence number and dispatches
//! a query without waiting for earlier dispatches to finish. When a response
//! arrives, it settles the view only if its sequence number is the highest
//! ever dispatched; anything older is discarded unconditionally. While a
//! newer dispatch is pending, the previous settled view stays on display
//! with a loading flag (stale-while-revalidate) — never a blank flash.
//!
//! # Modules
//!
//! - [`domain`]: Facet selection state, query composition, error types
//! - [`app`]: The reconciliation state machine (events → state → actions)
//! - [`gateway`]: The search index boundary and its wire shapes
//! - [`session`]: Tokio-based dispatch bridge ([`SearchSession`])
//! - [`ui`]: View models and response projection
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use facetizer::gateway::MemoryIndex;
//! use facetizer::session::SearchSession;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let index = MemoryIndex::from_json(r#"[{
//!     "id": "1",
//!     "title": "Reactive patterns",
//!     "category": "tech",
//!     "slug": "/posts/reactive-patterns",
//!     "publish_date": "2021-03-05T00:00:00Z",
//!     "authors": ["Ana"]
//! }]"#).unwrap();
//!
//! let mut session = SearchSession::new(index);
//! session.set_search_text("react");
//! session.toggle_facet("fields.category.en-US", "tech");
//!
//! let view = session.settled().await;
//! assert_eq!(view.hits.len(), 1);
//! assert_eq!(view.hits[0].category, "TECH");
//! assert_eq!(view.facets[0].title, "CATEGORY");
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod gateway;
pub mod observability;
pub mod session;
pub mod ui;

pub use app::{handle_event, Action, EngineState, Event, Phase};
pub use domain::{compose, FacetSelection, FacetizerError, QueryRequest, Result};
pub use gateway::{IndexConfig, IndexResponse, MemoryIndex, SearchGateway, SearchOptions};
pub use session::SearchSession;
pub use ui::{FieldPattern, SearchViewModel, ViewProjector};
