//! Projection of raw index responses into the display model.
//!
//! This module maps an [`IndexResponse`] into a [`SearchViewModel`]: facet
//! keys become display titles via [`FieldPattern`] extraction, raw hits
//! become [`PostCard`]s with a long-form date and an upper-cased category.
//!
//! Facet keys are an external, loosely-specified string format, so title
//! extraction is treated as fallible per entry: a key that does not match
//! the pattern drops that single catalog entry with a warning and never
//! aborts projection of the remaining facets or of the hits.

use crate::domain::error::{FacetizerError, Result};
use crate::gateway::models::{IndexResponse, RawHit};
use crate::ui::viewmodel::{FacetGroup, FacetOption, PostCard, SearchViewModel};
use serde::{Deserialize, Serialize};

fn default_prefix() -> String {
    "fields.".to_string()
}

fn default_suffix() -> String {
    ".en-US".to_string()
}

/// Markers delimiting the human-meaningful segment of a raw facet key.
///
/// The default pattern isolates the field name from a structured path like
/// `fields.category.en-US`, yielding `category`. The suffix is searched
/// after the prefix, and the segment between them must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPattern {
    /// Marker before the field name.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Marker after the field name.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for FieldPattern {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            suffix: default_suffix(),
        }
    }
}

impl FieldPattern {
    /// Extracts the segment between the markers, or `None` if the key does
    /// not match.
    #[must_use]
    pub fn extract(&self, key: &str) -> Option<String> {
        let start = key.find(&self.prefix)? + self.prefix.len();
        let end = start + key[start..].find(&self.suffix)?;
        (end > start).then(|| key[start..end].to_string())
    }
}

/// Maps settled index responses into the display model.
#[derive(Debug, Clone, Default)]
pub struct ViewProjector {
    pattern: FieldPattern,
}

impl ViewProjector {
    /// Creates a projector with the given field pattern.
    #[must_use]
    pub fn new(pattern: FieldPattern) -> Self {
        Self { pattern }
    }

    /// Projects a successful response into a view model.
    ///
    /// The returned model has `loading = false` and no error; the reconciler
    /// owns the loading flag. Catalog entries whose key fails title
    /// extraction are dropped individually, with a warning per entry.
    #[must_use]
    pub fn project(&self, response: &IndexResponse) -> SearchViewModel {
        let facets = response
            .facets
            .iter()
            .filter_map(|entry| match self.facet_title(&entry.key) {
                Ok(title) => Some(FacetGroup {
                    key: entry.key.clone(),
                    title,
                    options: entry
                        .options
                        .iter()
                        .map(|option| FacetOption {
                            value: option.value.clone(),
                            count: option.count,
                        })
                        .collect(),
                }),
                Err(error) => {
                    tracing::warn!(error = %error, "dropping facet with unextractable title");
                    None
                }
            })
            .collect();

        SearchViewModel {
            loading: false,
            hits: response.hits.iter().map(Self::post_card).collect(),
            facets,
            error: None,
        }
    }

    /// Derives the upper-cased display title for a raw facet key.
    ///
    /// # Errors
    ///
    /// Returns [`FacetizerError::MalformedFacetKey`] if the key does not
    /// contain the configured markers.
    pub fn facet_title(&self, key: &str) -> Result<String> {
        self.pattern
            .extract(key)
            .map(|segment| segment.to_uppercase())
            .ok_or_else(|| FacetizerError::MalformedFacetKey {
                key: key.to_string(),
            })
    }

    /// Formats one raw hit for display.
    fn post_card(hit: &RawHit) -> PostCard {
        PostCard {
            id: hit.id.clone(),
            title: hit.title.clone(),
            category: hit.category.to_uppercase(),
            slug: hit.slug.clone(),
            display_date: hit.publish_date.format("%B %d, %Y").to_string(),
            authors: hit.authors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::models::{FacetCount, FacetCounts};
    use chrono::{TimeZone, Utc};

    fn response() -> IndexResponse {
        IndexResponse {
            hits: vec![RawHit {
                id: "1".to_string(),
                title: "Reactive patterns".to_string(),
                category: "tech".to_string(),
                slug: "/posts/reactive-patterns".to_string(),
                publish_date: Utc.with_ymd_and_hms(2021, 3, 5, 8, 30, 0).unwrap(),
                authors: vec!["Ana".to_string(), "Ben".to_string()],
            }],
            facets: vec![
                FacetCounts {
                    key: "fields.category.en-US".to_string(),
                    options: vec![FacetCount { value: "tech".to_string(), count: 4 }],
                },
                FacetCounts {
                    key: "entirely-unstructured".to_string(),
                    options: vec![FacetCount { value: "x".to_string(), count: 1 }],
                },
            ],
        }
    }

    #[test]
    fn extracts_title_between_markers() {
        let pattern = FieldPattern::default();
        assert_eq!(
            pattern.extract("fields.category.en-US").as_deref(),
            Some("category"),
        );
    }

    #[test]
    fn extraction_fails_without_markers_or_segment() {
        let pattern = FieldPattern::default();
        assert_eq!(pattern.extract("category"), None);
        assert_eq!(pattern.extract("fields.category"), None);
        assert_eq!(pattern.extract("fields..en-US"), None);
    }

    #[test]
    fn malformed_key_drops_only_that_facet() {
        let view = ViewProjector::default().project(&response());
        assert_eq!(view.facets.len(), 1);
        assert_eq!(view.facets[0].title, "CATEGORY");
        assert_eq!(view.hits.len(), 1, "hits survive a dropped facet");
    }

    #[test]
    fn facet_title_error_names_the_key() {
        let err = ViewProjector::default()
            .facet_title("entirely-unstructured")
            .unwrap_err();
        assert!(matches!(
            err,
            FacetizerError::MalformedFacetKey { key } if key == "entirely-unstructured"
        ));
    }

    #[test]
    fn post_card_formats_date_and_category() {
        let view = ViewProjector::default().project(&response());
        let card = &view.hits[0];
        assert_eq!(card.display_date, "March 05, 2021");
        assert_eq!(card.category, "TECH");
        assert_eq!(card.title, "Reactive patterns");
        assert_eq!(card.authors, vec!["Ana".to_string(), "Ben".to_string()]);
    }

    #[test]
    fn custom_pattern_is_honored() {
        let projector = ViewProjector::new(FieldPattern {
            prefix: "attrs.".to_string(),
            suffix: ".raw".to_string(),
        });
        assert_eq!(projector.facet_title("attrs.author.raw").unwrap(), "AUTHOR");
    }
}
