// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-text search for static sites: BM25 ranking, Porter stemming, and
//! typo tolerance through a trigram index.
//!
//! The index is built once from a site's posts and then only read. Queries
//! support free terms, quoted phrases, a leading `tag:` filter, and a version
//! filter.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  analysis  │────▶│    index     │────▶│    search    │
//! │ (tokenize, │     │ (inverted,   │     │ (BM25, boosts│
//! │ stop, stem)│     │  stem map)   │     │  snippets)   │
//! └────────────┘     └──────────────┘     └──────────────┘
//!       │                   │                    ▲
//!       ▼                   ▼                    │
//! ┌────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   query    │     │    fuzzy     │────▶│   scoring    │
//! │ (phrases,  │     │ (levenshtein,│     │ (bm25, rank) │
//! │  tag:)     │     │  trigrams)   │     │              │
//! └────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sitesearch::{search, PostRecord, SearchIndex};
//!
//! let index = SearchIndex::build(vec![
//!     PostRecord::new("Go Guide", "/go")
//!         .with_tags(["go", "programming"])
//!         .with_content("A guide to Go programming language")
//!         .with_version("v1"),
//!     PostRecord::new("Rust Guide", "/rust")
//!         .with_tags(["rust", "programming"])
//!         .with_content("A guide to Rust programming")
//!         .with_version("v1"),
//! ]);
//!
//! let results = search(&index, "rust", "all");
//! assert_eq!(results[0].title, "[v1] Rust Guide");
//! ```

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fuzzy;
mod index;
pub mod query;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;

pub use analysis::{default_analyzer, stem, tokenize, Analyzer, StemCache};
pub use config::SearchConfig;
pub use corpus::{load_posts, parse_posts, PostInput};
pub use error::{IndexError, LoadError};
pub use fuzzy::{
    fuzzy_expand, fuzzy_match, levenshtein_distance, levenshtein_within, trigrams, TrigramIndex,
    MAX_EDIT_DISTANCE,
};
pub use query::{parse_query, parse_query_with, split_tag_filter, TagQuery};
pub use search::{extract_snippet, extract_snippet_with, search, Searcher, VersionFilter};
pub use types::{InvertedIndex, ParsedQuery, PostRecord, Postings, SearchIndex, SearchResult};
