//! Domain layer for the facetizer engine.
//!
//! This module contains the core domain types and business rules, independent
//! of any gateway implementation or UI shell: the facet selection state with
//! its invariants, the pure query composer, and the error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`selection`]: Multi-select facet selection state and serialization
//! - [`query`]: Query request composition

pub mod error;
pub mod query;
pub mod selection;

pub use error::{FacetizerError, Result};
pub use query::{compose, QueryRequest};
pub use selection::FacetSelection;
