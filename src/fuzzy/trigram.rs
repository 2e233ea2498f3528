// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trigram candidate generation for fuzzy lookups.
//!
//! Running Levenshtein against every term in the vocabulary is fine for a
//! hundred terms and painful for fifty thousand. Two strings within a couple
//! of edits share most of their 3-character windows, so we index terms by
//! trigram and only compute exact distances for terms that share at least
//! half of the query's trigrams.
//!
//! ```text
//! "pythn" ─▶ {pyt, yth, thn} ─▶ lookup ─▶ {python: 2, pythia: 2, ...} ─▶ overlap ≥ 1 ─▶ levenshtein ≤ 2
//! ```
//!
//! The filter can only drop candidates, never add them: every term returned
//! by [`TrigramIndex::expand`] is also returned by the brute-force
//! [`fuzzy_expand`].

use super::levenshtein::fuzzy_match;
use crate::types::InvertedIndex;
use std::collections::HashMap;

/// Overlapping 3-character windows of `word`.
///
/// A non-empty word shorter than three characters is its own single trigram.
///
/// ```
/// use sitesearch::trigrams;
///
/// assert_eq!(trigrams("rust"), vec!["rus", "ust"]);
/// assert_eq!(trigrams("go"), vec!["go"]);
/// ```
pub fn trigrams(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    match chars.len() {
        0 => Vec::new(),
        1..=2 => vec![word.to_string()],
        _ => chars.windows(3).map(|w| w.iter().collect()).collect(),
    }
}

/// Distinct trigrams in first-seen order.
fn distinct_trigrams(word: &str) -> Vec<String> {
    let mut grams = trigrams(word);
    let mut seen = std::collections::HashSet::with_capacity(grams.len());
    grams.retain(|g| seen.insert(g.clone()));
    grams
}

/// Trigram → terms containing it.
///
/// Built once from the vocabulary of an inverted index. Each term appears at
/// most once per trigram, and term lists are sorted so lookups are
/// deterministic regardless of hash iteration order.
#[derive(Debug, Clone, Default)]
pub struct TrigramIndex {
    grams: HashMap<String, Vec<String>>,
    term_count: usize,
}

impl TrigramIndex {
    /// Index every term in `terms`.
    pub fn build<'a, I>(terms: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut grams: HashMap<String, Vec<String>> = HashMap::new();
        let mut term_count = 0;

        for term in terms {
            term_count += 1;
            for gram in distinct_trigrams(term) {
                grams.entry(gram).or_default().push(term.to_string());
            }
        }

        for list in grams.values_mut() {
            list.sort_unstable();
            list.dedup();
        }

        Self { grams, term_count }
    }

    /// Index the vocabulary of an inverted index.
    pub fn from_inverted(inverted: &InvertedIndex) -> Self {
        Self::build(inverted.keys().map(String::as_str))
    }

    /// Number of distinct trigrams.
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    /// Number of terms indexed.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    /// Terms sharing a trigram with `gram`.
    pub fn terms_for(&self, gram: &str) -> &[String] {
        self.grams.get(gram).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Terms sharing at least half of `term`'s trigrams, with their overlap counts.
    ///
    /// Sorted by overlap descending, then term, so callers see the most
    /// promising candidates first.
    pub fn candidates(&self, term: &str) -> Vec<(&str, usize)> {
        let query_grams = distinct_trigrams(term);
        if query_grams.is_empty() {
            return Vec::new();
        }

        let mut overlap: HashMap<&str, usize> = HashMap::new();
        for gram in &query_grams {
            for candidate in self.terms_for(gram) {
                *overlap.entry(candidate.as_str()).or_insert(0) += 1;
            }
        }

        let min_overlap = query_grams.len() / 2;
        let mut out: Vec<(&str, usize)> = overlap
            .into_iter()
            .filter(|&(_, shared)| shared >= min_overlap)
            .collect();
        out.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        out
    }

    /// Indexed terms within `max_dist` edits of `term`, found via trigram overlap.
    pub fn expand(&self, term: &str, max_dist: usize) -> Vec<String> {
        let mut out: Vec<String> = self
            .candidates(term)
            .into_iter()
            .filter(|(candidate, _)| fuzzy_match(term, candidate, max_dist))
            .map(|(candidate, _)| candidate.to_string())
            .collect();
        out.sort_unstable();
        out
    }
}

/// Indexed terms within `max_dist` edits of `term`, by scanning the whole vocabulary.
///
/// O(vocabulary) distance computations. Fine for small indexes and as a
/// reference for [`TrigramIndex::expand`].
pub fn fuzzy_expand(term: &str, inverted: &InvertedIndex, max_dist: usize) -> Vec<String> {
    let mut out: Vec<String> = inverted
        .keys()
        .filter(|candidate| fuzzy_match(term, candidate, max_dist))
        .cloned()
        .collect();
    out.sort_unstable();
    out
}
