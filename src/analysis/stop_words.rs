// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! English stop words.
//!
//! Articles, pronouns, auxiliaries and prepositions: too common to help ranking,
//! and they cause false positives in fuzzy matching ("land" → "and").
//! The set is built once on first use and never mutated.

use std::collections::HashSet;
use std::sync::LazyLock;

#[rustfmt::skip]
const WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in",
    "into", "is", "it", "no", "not", "of", "on", "or", "such", "that", "the", "their",
    "then", "there", "these", "they", "this", "to", "was", "will", "with", "have", "has",
    "had", "been", "being", "from", "were", "what", "when", "where", "which", "who",
    "whom", "why", "how", "all", "each", "every", "both", "few", "more", "most",
    "other", "some", "any", "only", "own", "same", "so", "than", "too", "very",
    "can", "just", "should", "now", "also", "its", "about", "after", "before", "above",
    "below", "between", "under", "again", "further", "once", "here", "during", "out", "up",
    "down", "off", "over", "through", "because", "while", "until", "am", "i", "me", "my",
    "myself", "we", "our", "ours", "ourselves", "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself", "itself", "them",
    "themselves", "those",
    "do", "does", "did", "would", "could", "may", "might", "must", "shall", "need",
    "dare", "ought", "used", "nor",
];

/// The stop word set.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| WORDS.iter().copied().collect());

/// Check if a word is a stop word. Case-insensitive.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    if word.chars().any(char::is_uppercase) {
        STOP_WORDS.contains(word.to_lowercase().as_str())
    } else {
        STOP_WORDS.contains(word)
    }
}
