//! Presentation boundary: view models and projection.
//!
//! This module turns settled index responses into display-ready data. The
//! rendering itself (cards, checkboxes, layout) belongs to the consuming
//! shell; the engine only guarantees that what is exposed here always
//! corresponds to the most recent settled dispatch.
//!
//! # Modules
//!
//! - [`viewmodel`]: Immutable display model types
//! - [`projector`]: Response → view model mapping and facet title extraction

pub mod projector;
pub mod viewmodel;

pub use projector::{FieldPattern, ViewProjector};
pub use viewmodel::{FacetGroup, FacetOption, PostCard, SearchViewModel};
