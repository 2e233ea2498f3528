// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25 and the additive boosts.
//!
//! ```text
//! idf(t)      = ln(1 + (N - df + 0.5) / (df + 0.5))
//! bm25(t, d)  = idf(t) * tf * (k1 + 1) / (tf + k1 * (1 - b + b * |d| / avgdl))
//! ```
//!
//! The `+1` inside the log keeps idf positive even for terms present in more
//! than half the corpus.

use crate::config::SearchConfig;
use crate::types::{PostRecord, SearchIndex};

/// BM25 parameters bound to one index's corpus statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25 {
    pub k1: f64,
    pub b: f64,
    pub total_docs: usize,
    pub avg_doc_len: f64,
}

impl Bm25 {
    /// `None` when the corpus can't be scored (no posts, or no terms at all).
    pub fn new(k1: f64, b: f64, total_docs: usize, avg_doc_len: f64) -> Option<Self> {
        if total_docs == 0 || avg_doc_len <= 0.0 || !avg_doc_len.is_finite() {
            return None;
        }
        Some(Self {
            k1,
            b,
            total_docs,
            avg_doc_len,
        })
    }

    pub fn for_index(index: &SearchIndex, config: &SearchConfig) -> Option<Self> {
        Self::new(config.k1, config.b, index.total_docs, index.avg_doc_len)
    }

    /// Inverse document frequency of a term found in `df` posts.
    pub fn idf(&self, df: usize) -> f64 {
        let n = self.total_docs as f64;
        let df = df as f64;
        (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
    }

    /// Contribution of one term occurring `tf` times in a post of length `doc_len`.
    pub fn score(&self, idf: f64, tf: usize, doc_len: usize) -> f64 {
        let tf = tf as f64;
        let norm = 1.0 - self.b + self.b * doc_len as f64 / self.avg_doc_len;
        idf * tf * (self.k1 + 1.0) / (tf + self.k1 * norm)
    }
}

/// Title boost: the residual query appears verbatim in the lowercased title.
pub fn title_boost(post: &PostRecord, query: &str, config: &SearchConfig) -> f64 {
    if !query.is_empty() && post.normalized_title.contains(query) {
        config.title_boost
    } else {
        0.0
    }
}

/// Tag boost: one bonus per tag equal to the residual query or to the `tag:` filter.
///
/// A tag matching both still earns a single bonus.
pub fn tag_boost(
    post: &PostRecord,
    query: &str,
    tag_filter: Option<&str>,
    config: &SearchConfig,
) -> f64 {
    let matching = post
        .normalized_tags
        .iter()
        .filter(|tag| (!query.is_empty() && *tag == query) || tag_filter == Some(tag.as_str()))
        .count();
    matching as f64 * config.tag_boost
}

/// Phrase boost: doubled for a phrase in the title, single for one in the content.
pub fn phrase_boost(post: &PostRecord, phrases: &[String], config: &SearchConfig) -> f64 {
    let mut content_lower: Option<String> = None;
    phrases
        .iter()
        .map(|phrase| {
            if post.normalized_title.contains(phrase.as_str()) {
                config.phrase_boost * 2.0
            } else if content_lower
                .get_or_insert_with(|| post.content.to_lowercase())
                .contains(phrase.as_str())
            {
                config.phrase_boost
            } else {
                0.0
            }
        })
        .sum()
}
