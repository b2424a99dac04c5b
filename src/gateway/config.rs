//! Index configuration.
//!
//! This module defines [`IndexConfig`], the TOML-deserialized settings a UI
//! shell hands to the engine at startup: index credentials (consumed by
//! whatever concrete gateway the shell builds), the "all facets" request
//! flag, the facet-title field pattern, and the trace level consumed by
//! [`crate::observability::init_tracing`].

use crate::domain::error::{FacetizerError, Result};
use crate::ui::projector::FieldPattern;
use serde::Deserialize;
use std::path::Path;

fn default_request_all_facets() -> bool {
    true
}

fn default_trace_level() -> String {
    "info".to_string()
}

/// Settings for one search index connection.
///
/// # Example
///
/// ```
/// use facetizer::gateway::IndexConfig;
///
/// let config = IndexConfig::from_toml_str(
///     r#"
///     app_id = "APP123"
///     api_key = "search-only-key"
///     index = "posts"
///     "#,
/// ).unwrap();
///
/// assert_eq!(config.index, "posts");
/// assert!(config.request_all_facets);
/// assert_eq!(config.trace_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexConfig {
    /// Application identifier for the remote index service.
    pub app_id: String,
    /// Search-only API key. Never logged.
    pub api_key: String,
    /// Name of the index to query.
    pub index: String,
    /// Whether dispatches ask the index for the full facet catalog
    /// (`facets: ['*']`-style). Defaults to `true`.
    #[serde(default = "default_request_all_facets")]
    pub request_all_facets: bool,
    /// Markers used to extract human facet titles from raw field paths.
    /// Defaults to `fields.` / `.en-US`.
    #[serde(default)]
    pub field_pattern: FieldPattern,
    /// Level passed to the tracing subscriber when the shell initializes
    /// observability. Defaults to `"info"`.
    #[serde(default = "default_trace_level")]
    pub trace_level: String,
}

impl IndexConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`FacetizerError::Config`] if the TOML is malformed or a
    /// required field is missing.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| FacetizerError::Config(e.to_string()))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`FacetizerError::Io`] if the file cannot be read, or
    /// [`FacetizerError::Config`] if its contents do not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn minimal_config_fills_defaults() {
        let config = IndexConfig::from_toml_str(
            r#"
            app_id = "APP123"
            api_key = "key"
            index = "posts"
            "#,
        )
        .expect("minimal config parses");

        assert!(config.request_all_facets);
        assert_eq!(config.field_pattern, FieldPattern::default());
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = IndexConfig::from_toml_str(
            r#"
            app_id = "APP123"
            api_key = "key"
            index = "posts"
            request_all_facets = false
            trace_level = "debug"

            [field_pattern]
            prefix = "attrs."
            suffix = ".raw"
            "#,
        )
        .expect("full config parses");

        assert!(!config.request_all_facets);
        assert_eq!(config.trace_level, "debug");
        assert_eq!(config.field_pattern.prefix, "attrs.");
        assert_eq!(config.field_pattern.suffix, ".raw");
    }

    #[test]
    fn missing_credentials_is_a_config_error() {
        let err = IndexConfig::from_toml_str("index = \"posts\"").unwrap_err();
        assert!(matches!(err, FacetizerError::Config(_)));
    }

    #[test]
    fn load_reads_a_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "app_id = \"APP123\"\napi_key = \"key\"\nindex = \"posts\"\n"
        )
        .expect("write config");

        let config = IndexConfig::load(file.path()).expect("file config parses");
        assert_eq!(config.app_id, "APP123");
    }

    #[test]
    fn load_surfaces_io_errors() {
        let err = IndexConfig::load(Path::new("/nonexistent/facetizer.toml")).unwrap_err();
        assert!(matches!(err, FacetizerError::Io(_)));
    }
}
