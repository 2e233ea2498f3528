// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! The bounded check must agree with the full distance, and the distance
//! must respect the length bounds every edit distance obeys.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::{levenshtein_distance, levenshtein_within};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    let query: String = input.query.chars().take(50).collect();
    let target: String = input.target.chars().take(100).collect();
    let max = usize::from(input.max % 4);

    let distance = levenshtein_distance(&query, &target);
    assert_eq!(distance, levenshtein_distance(&target, &query));
    assert_eq!(
        levenshtein_within(&query, &target, max),
        distance <= max,
        "within disagrees for query='{query}', target='{target}', max={max}"
    );

    let (q, t) = (query.chars().count(), target.chars().count());
    assert!(q.abs_diff(t) <= distance);
    assert!(distance <= q.max(t));
    assert_eq!(levenshtein_distance(&query, &query), 0);
});
