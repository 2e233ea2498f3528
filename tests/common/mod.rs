//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sitesearch::{PostRecord, SearchIndex, SearchResult};

// Re-export canonical test utilities from sitesearch::testing
pub use sitesearch::testing::{index_from, make_post, make_tagged_post, sample_corpus, sample_index};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small blog across two doc versions, with overlapping vocabulary.
pub fn blog_corpus() -> Vec<PostRecord> {
    vec![
        make_tagged_post(
            0,
            "Understanding Rust Ownership",
            "Ownership is the most distinctive feature of Rust. Every value has an owner, \
             and the borrow checker enforces the rules at compile time.",
            &["rust", "memory"],
            "v2",
        ),
        make_tagged_post(
            1,
            "Async Networking in Rust",
            "Networking code in Rust usually builds on async runtimes. Futures are polled \
             by an executor, and network sockets register interest with a reactor.",
            &["rust", "async", "networking"],
            "v2",
        ),
        make_tagged_post(
            2,
            "Go Concurrency Patterns",
            "Goroutines and channels make concurrent programs easy to write. The select \
             statement multiplexes channel operations.",
            &["go", "concurrency"],
            "v1",
        ),
        make_tagged_post(
            3,
            "Computing with Transformers",
            "Transformers compute attention over every token. Computing attention is \
             quadratic in sequence length, which transforms how models are deployed.",
            &["ml"],
            "v1",
        ),
        make_tagged_post(
            4,
            "Release Notes",
            "This release improves indexing speed and fixes a crash when searching \
             an empty index.",
            &[],
            "",
        ),
    ]
}

pub fn blog_index() -> SearchIndex {
    SearchIndex::build(blog_corpus())
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Post ids in result order.
pub fn ids(results: &[SearchResult]) -> Vec<usize> {
    results.iter().map(|r| r.id).collect()
}

/// Results are sorted by score descending, ties by id ascending.
pub fn assert_ranked(results: &[SearchResult]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.id < b.id),
            "results out of order: {} ({}) before {} ({})",
            a.id,
            a.score,
            b.id,
            b.score
        );
    }
}
