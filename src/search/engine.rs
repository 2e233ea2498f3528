// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking loop.
//!
//! ```text
//! "tag:rust Ownership \"borrow checker\""
//!     │ trim + lowercase
//!     ▼
//! tag filter: rust ── residual: ownership "borrow checker"
//!                          │ parse
//!                          ▼
//!               terms: [ownership]   phrases: ["borrow checker"]
//!                          │
//!     BM25 (exact) or BM25 × 0.7 (fuzzy)  +  phrase boosts
//!                          │
//!     title / tag boosts for every post passing the filters
//!                          │
//!             sort (score desc, id asc) → top N → snippets
//! ```

use crate::analysis::{default_analyzer, Analyzer};
use crate::config::SearchConfig;
use crate::query::{parse_query_with, split_tag_filter, TagQuery};
use crate::scoring::ranking::rank;
use crate::scoring::{phrase_boost, tag_boost, title_boost, Bm25};
use crate::types::{PostRecord, Postings, SearchIndex, SearchResult};
use std::collections::HashMap;

use super::snippet::extract_snippet_with;

/// Version label meaning "search every version".
pub const ALL_VERSIONS: &str = "all";

/// Which posts a search may return, by version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionFilter<'v> {
    /// Every version; result titles get a `[version] ` prefix.
    #[default]
    All,
    /// Only posts whose version equals this label exactly.
    Only(&'v str),
}

impl<'v> From<&'v str> for VersionFilter<'v> {
    fn from(label: &'v str) -> Self {
        if label == ALL_VERSIONS {
            Self::All
        } else {
            Self::Only(label)
        }
    }
}

impl VersionFilter<'_> {
    pub fn accepts(&self, version: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => *label == version,
        }
    }
}

/// Search `index` with the default analyzer and configuration.
///
/// `version_filter` is `"all"` or an exact version label.
///
/// ```
/// use sitesearch::{search, PostRecord, SearchIndex};
///
/// let index = SearchIndex::build(vec![
///     PostRecord::new("Go Guide", "/go").with_content("Goroutines and channels"),
///     PostRecord::new("Rust Guide", "/rust").with_content("Ownership and borrowing"),
/// ]);
/// let results = search(&index, "borrowing", "all");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].link, "/rust");
/// ```
pub fn search(index: &SearchIndex, query: &str, version_filter: &str) -> Vec<SearchResult> {
    Searcher::new(index).search(query, version_filter)
}

/// A search over one index with a fixed analyzer and configuration.
///
/// Holds only shared references to the index, so any number of searchers can
/// query the same index from different threads.
#[derive(Debug, Clone)]
pub struct Searcher<'a> {
    index: &'a SearchIndex,
    analyzer: &'a Analyzer,
    config: SearchConfig,
}

/// The parts of a query that survive pre-processing.
struct Prepared<'q> {
    tag: Option<&'q str>,
    residual: &'q str,
    terms: Vec<String>,
    phrases: Vec<String>,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        Self {
            index,
            analyzer: default_analyzer(),
            config: SearchConfig::default(),
        }
    }

    /// Analyze queries with `analyzer`. It must match the one the index was built with.
    pub fn with_analyzer(mut self, analyzer: &'a Analyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index(&self) -> &SearchIndex {
        self.index
    }

    /// Run a query. Never fails: anything unusable yields no results.
    pub fn search<'v>(&self, query: &str, version: impl Into<VersionFilter<'v>>) -> Vec<SearchResult> {
        let version = version.into();
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let Some(bm25) = Bm25::for_index(self.index, &self.config) else {
            tracing::debug!(
                total_docs = self.index.total_docs,
                avg_doc_len = self.index.avg_doc_len,
                "index cannot be scored"
            );
            return Vec::new();
        };

        let prepared = self.prepare(&query);
        let eligible = |post: &PostRecord| {
            version.accepts(&post.version) && prepared.tag.map_or(true, |t| post.has_tag(t))
        };

        let mut scores: HashMap<usize, f64> = HashMap::new();
        let mut highlight_terms: Vec<String> = Vec::new();

        for term in &prepared.terms {
            highlight_terms.push(term.clone());
            if let Some(postings) = self.index.postings(term) {
                self.accumulate(&bm25, postings, 1.0, &eligible, &mut scores);
            } else if self.config.fuzzy {
                let expansions = self
                    .index
                    .trigram_index()
                    .expand(term, self.config.max_edit_distance);
                tracing::trace!(term = %term, ?expansions, "fuzzy expansion");
                for candidate in expansions {
                    if let Some(postings) = self.index.postings(&candidate) {
                        self.accumulate(
                            &bm25,
                            postings,
                            self.config.fuzzy_modifier,
                            &eligible,
                            &mut scores,
                        );
                    }
                    highlight_terms.push(candidate);
                }
            }
        }

        let tag_only = prepared.terms.is_empty() && prepared.phrases.is_empty();

        for (id, post) in self.index.posts.iter().enumerate() {
            if !eligible(post) {
                continue;
            }

            let phrases = phrase_boost(post, &prepared.phrases, &self.config);
            if phrases > 0.0 {
                *scores.entry(id).or_insert(0.0) += phrases;
            }

            if tag_only && prepared.tag.is_some() {
                scores.insert(id, 1.0);
            }

            // A title or residual-tag hit makes a post a result on its own;
            // carrying the filter tag only adds to posts that already scored.
            let title = title_boost(post, prepared.residual, &self.config);
            let residual_tag = !prepared.residual.is_empty() && post.has_tag(prepared.residual);
            if title > 0.0 || residual_tag || scores.contains_key(&id) {
                *scores.entry(id).or_insert(0.0) +=
                    title + tag_boost(post, prepared.residual, prepared.tag, &self.config);
            }
        }

        let mut results: Vec<SearchResult> = scores
            .into_iter()
            .filter_map(|(id, score)| {
                let post = self.index.post(id)?;
                Some(self.result(id, post, score, version))
            })
            .collect();
        rank(&mut results, self.config.max_results);

        let highlight_terms = self.with_surface_forms(highlight_terms);
        for result in &mut results {
            if let Some(post) = self.index.post(result.id) {
                result.snippet = extract_snippet_with(&post.content, &highlight_terms, &self.config);
            }
        }

        tracing::debug!(
            query = %query,
            terms = prepared.terms.len(),
            phrases = prepared.phrases.len(),
            results = results.len(),
            "search"
        );
        results
    }

    fn prepare<'q>(&self, query: &'q str) -> Prepared<'q> {
        let TagQuery { tag, rest } = split_tag_filter(query);
        let parsed = parse_query_with(rest, self.analyzer);
        Prepared {
            tag,
            residual: rest,
            terms: parsed.terms,
            phrases: parsed.phrases,
        }
    }

    fn accumulate(
        &self,
        bm25: &Bm25,
        postings: &Postings,
        weight: f64,
        eligible: &impl Fn(&PostRecord) -> bool,
        scores: &mut HashMap<usize, f64>,
    ) {
        let idf = bm25.idf(postings.len());
        for (&id, &freq) in postings {
            let Some(post) = self.index.post(id) else {
                continue;
            };
            if !eligible(post) {
                continue;
            }
            let score = bm25.score(idf, freq, self.index.doc_len(id)) * weight;
            *scores.entry(id).or_insert(0.0) += score;
        }
    }

    fn result(&self, id: usize, post: &PostRecord, score: f64, version: VersionFilter<'_>) -> SearchResult {
        let title = if version == VersionFilter::All && !post.version.is_empty() {
            format!("[{}] {}", post.version, post.title)
        } else {
            post.title.clone()
        };
        SearchResult {
            id,
            title,
            link: post.link.clone(),
            description: post.description.clone(),
            snippet: String::new(),
            version: post.version.clone(),
            score,
        }
    }

    /// Matched index terms plus every surface form that stemmed to them.
    fn with_surface_forms(&self, terms: Vec<String>) -> Vec<String> {
        let mut out = Vec::with_capacity(terms.len());
        for term in terms {
            out.extend(self.index.originals(&term).iter().cloned());
            out.push(term);
        }
        out.sort_unstable();
        out.dedup();
        out
    }
}
