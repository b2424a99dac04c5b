//! Error types for the facetizer engine.
//!
//! This module defines the centralized error type [`FacetizerError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented using
//! the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Nothing in the engine propagates an error by panicking: gateway failures and
//! malformed facet keys are converted into view-model states at the reconciler
//! boundary, so none of these variants ever escapes to crash a host shell.

use thiserror::Error;

/// The main error type for facetizer operations.
///
/// Consolidates every failure condition the engine can observe, from transport
/// failures at the search gateway to configuration problems at startup. The
/// string payloads are opaque descriptions intended for logs and the view
/// model's `error` field, not for programmatic matching.
#[derive(Debug, Error)]
pub enum FacetizerError {
    /// The remote index call did not complete successfully.
    ///
    /// Covers timeouts, malformed payloads, and non-success responses alike.
    /// The reconciler converts this into an empty settled view with the
    /// description surfaced on the view model.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A raw facet key did not match the configured field pattern.
    ///
    /// Raised during title extraction when a key lacks the expected prefix or
    /// suffix marker. The projector drops the single offending catalog entry
    /// and continues; the remaining facets and all hits still project.
    #[error("Malformed facet key: {key}")]
    MalformedFacetKey {
        /// The raw key that failed title extraction.
        key: String,
    },

    /// Configuration is invalid or missing.
    ///
    /// Occurs when index configuration cannot be parsed or required values
    /// are malformed. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. while reading
    /// a configuration file. Automatically converts via `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON payload could not be decoded.
    ///
    /// Occurs when a fixture corpus or canned index response fails to parse.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A specialized `Result` type for facetizer operations.
pub type Result<T> = std::result::Result<T, FacetizerError>;
