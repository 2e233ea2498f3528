// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{PostRecord, SearchIndex};

/// Create a post with a title and content, linked at `/posts/<id>`.
pub fn make_post(id: usize, title: &str, content: &str) -> PostRecord {
    PostRecord::new(title, format!("/posts/{}", id)).with_content(content)
}

/// Create a post with tags and a version.
pub fn make_tagged_post(
    id: usize,
    title: &str,
    content: &str,
    tags: &[&str],
    version: &str,
) -> PostRecord {
    make_post(id, title, content)
        .with_tags(tags.iter().copied())
        .with_version(version)
}

/// Three posts across two versions: Go and Rust guides in v1, a Python intro in v2.
pub fn sample_corpus() -> Vec<PostRecord> {
    vec![
        make_tagged_post(
            0,
            "Go Guide",
            "A guide to Go programming language",
            &["go", "programming"],
            "v1",
        )
        .with_description("Learn Go"),
        make_tagged_post(
            1,
            "Rust Guide",
            "A guide to Rust programming",
            &["rust", "programming"],
            "v1",
        )
        .with_description("Learn Rust"),
        make_tagged_post(2, "Python Intro", "Introduction to Python", &["python"], "v2")
            .with_description("Learn Python"),
    ]
}

/// [`sample_corpus`] built with the default analyzer.
pub fn sample_index() -> SearchIndex {
    SearchIndex::build(sample_corpus())
}

/// Build an index from `(title, content)` pairs.
pub fn index_from(docs: &[(&str, &str)]) -> SearchIndex {
    SearchIndex::build(
        docs.iter()
            .enumerate()
            .map(|(id, (title, content))| make_post(id, title, content))
            .collect(),
    )
}
