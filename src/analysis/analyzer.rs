// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The analyzer: tokenizer + stop word filter + stemmer, wired together.
//!
//! Two switches, `use_stop_words` and `use_stemming`, both on by default.
//! Stemming is memoized through a [`StemCache`] the analyzer owns; the cache is
//! shared behind an `Arc` so that clones of an analyzer (and every rayon worker
//! indexing posts in parallel) hit the same table.

use super::stemmer::stem;
use super::stop_words::is_stop_word;
use super::tokenizer::{is_long_enough, tokens};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Entries a [`StemCache`] holds before it stops admitting new words.
pub const DEFAULT_CACHE_CAPACITY: usize = 65_536;

/// Words longer than this are stemmed but never cached.
const MAX_CACHED_WORD_LEN: usize = 64;

/// Memoized `word → stem` table.
///
/// Pure performance: a miss computes the stem and stores it, a hit skips the
/// Porter passes. Readers never block each other. Once `capacity` entries are
/// stored, misses are still stemmed but no longer inserted, so a long-lived
/// process querying an unbounded vocabulary keeps a bounded table.
#[derive(Debug)]
pub struct StemCache {
    stems: RwLock<HashMap<String, String>>,
    capacity: usize,
}

impl Default for StemCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl StemCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that stores at most `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stems: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the cached stem for `word`, computing it on a miss and storing
    /// it while there is room.
    pub fn get_or_stem(&self, word: &str) -> String {
        if let Some(hit) = self.stems.read().get(word) {
            return hit.clone();
        }
        let stemmed = stem(word);
        if word.len() <= MAX_CACHED_WORD_LEN {
            let mut stems = self.stems.write();
            if stems.len() < self.capacity {
                stems
                    .entry(word.to_string())
                    .or_insert_with(|| stemmed.clone());
            }
        }
        stemmed
    }

    pub fn len(&self) -> usize {
        self.stems.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.stems.write().clear();
    }
}

/// Turns raw text into index terms.
#[derive(Debug, Clone)]
pub struct Analyzer {
    use_stop_words: bool,
    use_stemming: bool,
    cache: Option<Arc<StemCache>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(true, true)
    }
}

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::default);

/// The process-wide analyzer with stop words and stemming enabled.
pub fn default_analyzer() -> &'static Analyzer {
    &DEFAULT_ANALYZER
}

impl Analyzer {
    /// Create an analyzer with its own, empty stem cache.
    pub fn new(use_stop_words: bool, use_stemming: bool) -> Self {
        Self {
            use_stop_words,
            use_stemming,
            cache: Some(Arc::new(StemCache::new())),
        }
    }

    /// Share an existing stem cache.
    pub fn with_cache(mut self, cache: Arc<StemCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Stem every word from scratch.
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    pub fn uses_stop_words(&self) -> bool {
        self.use_stop_words
    }

    pub fn uses_stemming(&self) -> bool {
        self.use_stemming
    }

    pub fn cache(&self) -> Option<&Arc<StemCache>> {
        self.cache.as_ref()
    }

    /// Lowercased, length-filtered, stop-word-filtered tokens (not yet stemmed).
    fn surface_terms<'t>(&'t self, text: &'t str) -> impl Iterator<Item = String> + 't {
        tokens(text)
            .map(str::to_lowercase)
            .filter(|t| is_long_enough(t))
            .filter(move |t| !(self.use_stop_words && is_stop_word(t)))
    }

    fn normalize_term(&self, token: &str) -> String {
        if !self.use_stemming {
            return token.to_string();
        }
        match &self.cache {
            Some(cache) => cache.get_or_stem(token),
            None => stem(token),
        }
    }

    /// Analyze text into normalized terms.
    ///
    /// ```
    /// use sitesearch::default_analyzer;
    ///
    /// let terms = default_analyzer().analyze("The quick brown foxes");
    /// assert_eq!(terms, vec!["quick", "brown", "fox"]);
    /// ```
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.surface_terms(text)
            .map(|t| self.normalize_term(&t))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Analyze text, keeping the pre-stemming form of every term.
    ///
    /// Both vectors have the same length and line up index for index, so a
    /// caller can fuzzy-match on `originals[i]` while ranking on `stemmed[i]`.
    pub fn analyze_with_originals(&self, text: &str) -> (Vec<String>, Vec<String>) {
        let mut stemmed = Vec::new();
        let mut originals = Vec::new();
        for token in self.surface_terms(text) {
            stemmed.push(self.normalize_term(&token));
            originals.push(token);
        }
        (stemmed, originals)
    }
}
