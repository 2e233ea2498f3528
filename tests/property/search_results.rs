//! Search invariants over random corpora and queries.

use super::strategies::{corpus_strategy, query_strategy};
use crate::common::assert_ranked;
use proptest::prelude::*;
use sitesearch::{search, SearchIndex};
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Built indexes always pass validation.
    #[test]
    fn prop_built_index_is_valid(posts in corpus_strategy()) {
        let index = SearchIndex::build(posts);
        prop_assert!(index.validate().is_ok());
    }

    /// Results are capped, ranked, unique and point at real posts.
    #[test]
    fn prop_results_well_formed(posts in corpus_strategy(), query in query_strategy()) {
        let index = SearchIndex::build(posts);
        let results = search(&index, &query, "all");
        prop_assert!(results.len() <= 10);
        assert_ranked(&results);

        let mut seen = HashSet::new();
        for result in &results {
            prop_assert!(seen.insert(result.id));
            let post = &index.posts[result.id];
            prop_assert_eq!(&result.link, &post.link);
            prop_assert_eq!(&result.version, &post.version);
            prop_assert!(result.score > 0.0 && result.score.is_finite());
            let expected_title = if post.version.is_empty() {
                post.title.clone()
            } else {
                format!("[{}] {}", post.version, post.title)
            };
            prop_assert_eq!(&result.title, &expected_title);
        }
    }

    /// A specific version filter only returns that version, with bare titles.
    #[test]
    fn prop_version_filter_is_exact(
        posts in corpus_strategy(),
        query in query_strategy(),
        version in prop::sample::select(vec!["v1", "v2"]),
    ) {
        let index = SearchIndex::build(posts);
        for result in search(&index, &query, version) {
            prop_assert_eq!(result.version.as_str(), version);
            prop_assert_eq!(&result.title, &index.posts[result.id].title);
        }
    }

    /// A tag filter only returns posts carrying that tag.
    #[test]
    fn prop_tag_filter_is_mandatory(posts in corpus_strategy(), query in query_strategy()) {
        let index = SearchIndex::build(posts);
        let lowered = query.trim().to_lowercase();
        if let Some(tag) = sitesearch::split_tag_filter(&lowered).tag {
            for result in search(&index, &query, "all") {
                prop_assert!(index.posts[result.id].has_tag(tag));
            }
        }
    }

    /// Searching is deterministic.
    #[test]
    fn prop_search_deterministic(posts in corpus_strategy(), query in query_strategy()) {
        let index = SearchIndex::build(posts);
        prop_assert_eq!(search(&index, &query, "all"), search(&index, &query, "all"));
    }

    /// Arbitrary input never panics.
    #[test]
    fn prop_arbitrary_query_never_panics(posts in corpus_strategy(), query in ".{0,40}", version in ".{0,4}") {
        let index = SearchIndex::build(posts);
        let results = search(&index, &query, &version);
        prop_assert!(results.len() <= 10);
    }
}

#[test]
fn empty_index_returns_nothing() {
    let index = SearchIndex::build(Vec::new());
    assert!(search(&index, "anything", "all").is_empty());
    assert!(search(&index, "tag:rust", "all").is_empty());
}
