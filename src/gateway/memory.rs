//! In-process fixture index.
//!
//! [`MemoryIndex`] implements [`SearchGateway`] over a fixed corpus of posts,
//! for tests and demo shells that have no remote index to talk to. It is a
//! fixture, not a search engine: free text is a case-insensitive substring
//! match on the title, there is no ranking, tokenization, or typo-tolerance.
//!
//! Filter semantics follow the remote contract the engine was built against:
//! within one facet the selected values are OR-ed, across facets the filters
//! are AND-ed. Facet counts are computed post-filter, over the result set of
//! the current query.

use crate::domain::error::{FacetizerError, Result};
use crate::gateway::backend::SearchGateway;
use crate::gateway::models::{FacetCount, FacetCounts, IndexResponse, RawHit, SearchOptions};
use crate::ui::projector::FieldPattern;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// In-memory search index over a fixed post corpus.
///
/// # Example
///
/// ```
/// use facetizer::gateway::{MemoryIndex, SearchOptions};
///
/// let index = MemoryIndex::from_json(r#"[{
///     "id": "1",
///     "title": "Reactive patterns",
///     "category": "tech",
///     "slug": "/posts/reactive-patterns",
///     "publish_date": "2021-03-05T00:00:00Z",
///     "authors": ["Ana"]
/// }]"#).unwrap();
///
/// let response = index.run("react", &SearchOptions::default()).unwrap();
/// assert_eq!(response.hits.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryIndex {
    hits: Vec<RawHit>,
    facet_fields: Vec<String>,
    pattern: FieldPattern,
}

impl MemoryIndex {
    /// Creates an index over `hits` faceted on the default post fields
    /// (`fields.category.en-US` and `fields.authors.en-US`).
    #[must_use]
    pub fn new(hits: Vec<RawHit>) -> Self {
        Self {
            hits,
            facet_fields: vec![
                "fields.category.en-US".to_string(),
                "fields.authors.en-US".to_string(),
            ],
            pattern: FieldPattern::default(),
        }
    }

    /// Replaces the faceted field paths.
    #[must_use]
    pub fn with_facet_fields(mut self, fields: Vec<String>) -> Self {
        self.facet_fields = fields;
        self
    }

    /// Loads a corpus from a JSON array of raw hits.
    ///
    /// # Errors
    ///
    /// Returns [`FacetizerError::Decode`] if the JSON does not parse.
    pub fn from_json(raw: &str) -> Result<Self> {
        let hits: Vec<RawHit> = serde_json::from_str(raw)?;
        Ok(Self::new(hits))
    }

    /// Runs one query synchronously. The [`SearchGateway`] impl delegates
    /// here; tests can call it directly without a runtime.
    ///
    /// # Errors
    ///
    /// Returns [`FacetizerError::Transport`] for a malformed filter
    /// expression, mirroring how a remote index rejects a bad request.
    pub fn run(&self, query_text: &str, options: &SearchOptions) -> Result<IndexResponse> {
        let filters = options
            .filter_expressions
            .iter()
            .map(|expression| parse_expression(expression))
            .collect::<Result<Vec<_>>>()?;

        let needle = query_text.to_lowercase();
        let hits: Vec<RawHit> = self
            .hits
            .iter()
            .filter(|hit| needle.is_empty() || hit.title.to_lowercase().contains(&needle))
            .filter(|hit| {
                filters.iter().all(|(key, wanted)| {
                    let present = self.field_values(hit, key);
                    wanted.iter().any(|value| present.contains(value))
                })
            })
            .cloned()
            .collect();

        let facets = self.count_facets(&hits, &filters, options.request_all_facets);

        Ok(IndexResponse { hits, facets })
    }

    /// Facet values of `hit` for a raw field path, resolved through the
    /// field pattern. Unknown fields yield no values.
    fn field_values(&self, hit: &RawHit, key: &str) -> Vec<String> {
        match self.pattern.extract(key).as_deref() {
            Some("category") => vec![hit.category.clone()],
            Some("authors") => hit.authors.clone(),
            Some("title") => vec![hit.title.clone()],
            _ => vec![],
        }
    }

    fn count_facets(
        &self,
        hits: &[RawHit],
        filters: &[(String, Vec<String>)],
        request_all_facets: bool,
    ) -> Vec<FacetCounts> {
        let keys: Vec<&String> = if request_all_facets {
            self.facet_fields.iter().collect()
        } else {
            self.facet_fields
                .iter()
                .filter(|field| filters.iter().any(|(key, _)| key == *field))
                .collect()
        };

        keys.into_iter()
            .filter_map(|key| {
                // First-seen order keeps the catalog stable across queries.
                let mut options: Vec<FacetCount> = Vec::new();
                for hit in hits {
                    for value in self.field_values(hit, key) {
                        match options.iter_mut().find(|option| option.value == value) {
                            Some(option) => option.count += 1,
                            None => options.push(FacetCount { value, count: 1 }),
                        }
                    }
                }
                (!options.is_empty()).then(|| FacetCounts {
                    key: key.clone(),
                    options,
                })
            })
            .collect()
    }
}

/// Splits a `"key:value1,value2"` expression into its key and values.
fn parse_expression(expression: &str) -> Result<(String, Vec<String>)> {
    let (key, values) = expression
        .split_once(':')
        .filter(|(key, values)| !key.is_empty() && !values.is_empty())
        .ok_or_else(|| {
            FacetizerError::Transport(format!("malformed filter expression: {expression:?}"))
        })?;
    Ok((
        key.to_string(),
        values.split(',').map(str::to_string).collect(),
    ))
}

impl SearchGateway for MemoryIndex {
    fn search(
        &self,
        query_text: String,
        options: SearchOptions,
    ) -> BoxFuture<'static, Result<IndexResponse>> {
        let outcome = self.run(&query_text, &options);
        async move { outcome }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(id: &str, title: &str, category: &str, authors: &[&str]) -> RawHit {
        RawHit {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            slug: format!("/posts/{id}"),
            publish_date: Utc.with_ymd_and_hms(2021, 3, 5, 12, 0, 0).unwrap(),
            authors: authors.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    fn corpus() -> MemoryIndex {
        MemoryIndex::new(vec![
            post("1", "Reactive patterns", "tech", &["Ana"]),
            post("2", "Slow mornings", "life", &["Ben"]),
            post("3", "React state machines", "tech", &["Ana", "Ben"]),
        ])
    }

    fn options(filters: &[&str]) -> SearchOptions {
        SearchOptions {
            filter_expressions: filters.iter().map(|f| (*f).to_string()).collect(),
            request_all_facets: true,
        }
    }

    #[test]
    fn empty_query_returns_whole_corpus() {
        let response = corpus().run("", &options(&[])).unwrap();
        assert_eq!(response.hits.len(), 3);
    }

    #[test]
    fn free_text_matches_titles_case_insensitively() {
        let response = corpus().run("rEaCt", &options(&[])).unwrap();
        let ids: Vec<&str> = response.hits.iter().map(|hit| hit.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn values_within_one_facet_are_or_ed() {
        let response = corpus()
            .run("", &options(&["fields.category.en-US:tech,life"]))
            .unwrap();
        assert_eq!(response.hits.len(), 3);
    }

    #[test]
    fn facets_are_and_ed_across_keys() {
        let response = corpus()
            .run(
                "",
                &options(&["fields.category.en-US:tech", "fields.authors.en-US:Ben"]),
            )
            .unwrap();
        let ids: Vec<&str> = response.hits.iter().map(|hit| hit.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn counts_reflect_the_filtered_result_set() {
        let response = corpus()
            .run("", &options(&["fields.category.en-US:tech"]))
            .unwrap();
        let authors = response
            .facets
            .iter()
            .find(|facet| facet.key == "fields.authors.en-US")
            .expect("authors facet present");
        assert_eq!(
            authors.options,
            vec![
                FacetCount { value: "Ana".to_string(), count: 2 },
                FacetCount { value: "Ben".to_string(), count: 1 },
            ],
        );
    }

    #[test]
    fn without_request_all_facets_only_filtered_keys_are_counted() {
        let mut opts = options(&["fields.category.en-US:tech"]);
        opts.request_all_facets = false;
        let response = corpus().run("", &opts).unwrap();
        let keys: Vec<&str> = response.facets.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["fields.category.en-US"]);
    }

    #[test]
    fn malformed_expression_is_a_transport_error() {
        let err = corpus().run("", &options(&["no-colon-here"])).unwrap_err();
        assert!(matches!(err, FacetizerError::Transport(_)));
    }

    #[test]
    fn from_json_decodes_a_corpus() {
        let index = MemoryIndex::from_json(
            r#"[{
                "id": "1",
                "title": "Reactive patterns",
                "category": "tech",
                "slug": "/posts/1",
                "publish_date": "2021-03-05T00:00:00Z",
                "authors": ["Ana"]
            }]"#,
        )
        .unwrap();
        assert_eq!(index.run("", &options(&[])).unwrap().hits.len(), 1);
    }

    #[test]
    fn garbage_json_is_a_decode_error() {
        let err = MemoryIndex::from_json("{not json").unwrap_err();
        assert!(matches!(err, FacetizerError::Decode(_)));
    }
}
