// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Searching never fails: bad queries and degenerate indexes just return
//! nothing. Errors only come from two places: an index whose fields disagree
//! with each other ([`IndexError`]) and post/config files that can't be read
//! ([`LoadError`]).

use std::path::PathBuf;
use thiserror::Error;

/// A structural inconsistency in a [`SearchIndex`](crate::SearchIndex).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    #[error("term '{term}' references post {post_id}, but only {num_posts} posts exist")]
    InvalidPostingId {
        term: String,
        post_id: usize,
        num_posts: usize,
    },

    #[error("term '{term}' has a zero frequency for post {post_id}")]
    ZeroFrequency { term: String, post_id: usize },

    #[error("document length recorded for post {post_id}, but only {num_posts} posts exist")]
    InvalidDocLenId { post_id: usize, num_posts: usize },

    #[error("total_docs is {actual}, expected {expected}")]
    IncorrectTotalDocs { expected: usize, actual: usize },

    #[error("avg_doc_len is {actual}, expected {expected}")]
    IncorrectAvgDocLen { expected: f64, actual: f64 },

    #[error("post {post_id}: normalized title '{actual}' is not the lowercased title")]
    UnnormalizedTitle { post_id: usize, actual: String },

    #[error("post {post_id}: normalized tags {actual:?} do not match lowercased tags")]
    UnnormalizedTags { post_id: usize, actual: Vec<String> },
}

/// Failure reading posts or configuration from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            what: what.into(),
            source,
        }
    }
}
