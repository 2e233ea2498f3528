//! Shared proptest strategies.

use proptest::prelude::*;
use sitesearch::PostRecord;

/// Lowercase word-like strings.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,10}").unwrap()
}

/// Words drawn from a small vocabulary so documents overlap.
pub fn vocab_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "search", "index", "rust", "trust", "crust", "go", "network", "networking", "compute",
        "computing", "python", "pythonic", "guide", "guides", "async", "await", "token",
        "tokens", "stemmer", "stemming",
    ])
    .prop_map(str::to_string)
}

pub fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(vocab_word(), 1..12).prop_map(|words| words.join(" "))
}

pub fn version_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "v1", "v2"]).prop_map(str::to_string)
}

/// A post with a title, content, version and up to two tags from the vocabulary.
pub fn post_strategy() -> impl Strategy<Value = PostRecord> {
    (
        prop::collection::vec(vocab_word(), 1..4),
        document_strategy(),
        version_strategy(),
        prop::collection::vec(vocab_word(), 0..3),
    )
        .prop_map(|(title, content, version, tags)| {
            PostRecord::new(title.join(" "), "/p")
                .with_content(content)
                .with_version(version)
                .with_tags(tags)
        })
}

pub fn corpus_strategy() -> impl Strategy<Value = Vec<PostRecord>> {
    prop::collection::vec(post_strategy(), 1..15)
}

/// Queries mixing vocabulary words, typos, phrases and tag filters.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        vocab_word(),
        word_strategy(),
        (vocab_word(), vocab_word()).prop_map(|(a, b)| format!("{a} {b}")),
        (vocab_word(), vocab_word()).prop_map(|(a, b)| format!("\"{a} {b}\"")),
        (vocab_word(), vocab_word()).prop_map(|(t, q)| format!("tag:{t} {q}")),
        vocab_word().prop_map(|t| format!("tag:{t}")),
    ]
}
