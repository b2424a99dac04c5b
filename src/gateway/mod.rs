//! Search index boundary.
//!
//! This module owns everything that touches the remote index contract: the
//! [`SearchGateway`] trait abstraction, the wire shapes of its
//! request/response payloads, index configuration, and the in-process
//! [`MemoryIndex`] fixture used by tests and demo shells.
//!
//! # Modules
//!
//! - `backend`: [`SearchGateway`] trait abstraction over index implementations
//! - `models`: Wire shapes of the external `search(text, options)` contract
//! - `config`: TOML-deserialized index settings
//! - `memory`: In-process fixture index

pub mod backend;
pub mod config;
pub mod memory;
pub mod models;

pub use backend::SearchGateway;
pub use config::IndexConfig;
pub use memory::MemoryIndex;
pub use models::{FacetCount, FacetCounts, IndexResponse, RawHit, SearchOptions};
