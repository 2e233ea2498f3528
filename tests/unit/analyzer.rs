//! Analyzer pipeline: tokenize, filter, stem.

use sitesearch::{default_analyzer, tokenize, Analyzer, StemCache};
use std::sync::Arc;

#[test]
fn test_mixed_case_is_normalized() {
    let terms = default_analyzer().analyze("Machine Learning Neural Networks");
    assert_eq!(terms, vec!["machin", "learn", "neural", "network"]);
}

#[test]
fn test_stemming_and_stop_words_together() {
    let terms = default_analyzer().analyze("running quickly through the forest");
    assert_eq!(terms, vec!["run", "quickli", "forest"]);
}

#[test]
fn test_tokenizer_keeps_case_and_splits_on_punctuation() {
    assert_eq!(
        tokenize("Hello, World! It's 2024."),
        vec!["Hello", "World", "It", "s", "2024"]
    );
    assert!(tokenize("").is_empty());
    assert!(tokenize("--- ... !!!").is_empty());
}

#[test]
fn test_unicode_letters_are_word_characters() {
    assert_eq!(tokenize("naïve café"), vec!["naïve", "café"]);
    assert_eq!(default_analyzer().analyze("Über"), vec!["über"]);
}

#[test]
fn test_shared_cache_across_threads() {
    let cache = Arc::new(StemCache::new());
    let analyzer = Analyzer::default().with_cache(Arc::clone(&cache));
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| analyzer.analyze("processing networks generalization"));
        }
    });
    assert_eq!(cache.len(), 3);
}
