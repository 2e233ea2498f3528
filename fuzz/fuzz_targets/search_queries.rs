// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries and version labels at the search API. Searching
//! has no error path, so any panic is a bug, and every result set must be
//! capped, ranked and free of duplicates.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::{search, testing::sample_index, SearchIndex};
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    version: String,
}

fuzz_target!(|input: SearchInput| {
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(sample_index);

    // Cap length to avoid timeouts
    let query: String = input.query.chars().take(200).collect();
    let results = search(index, &query, &input.version);

    assert!(results.len() <= 10, "got {} results", results.len());

    let mut seen = HashSet::new();
    for result in &results {
        assert!(result.id < index.posts.len(), "id {} out of bounds", result.id);
        assert!(seen.insert(result.id), "duplicate id {}", result.id);
        assert!(result.score.is_finite() && result.score > 0.0);
    }

    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.id < b.id),
            "out of order: {} ({}) before {} ({})",
            a.id,
            a.score,
            b.id,
            b.score
        );
    }

    if query.trim().is_empty() {
        assert!(results.is_empty());
    }
});
