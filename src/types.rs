// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! These types define how posts, postings and results fit together. The index
//! is built once per site build, then only ever read.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **PostRecord**: `normalized_title == title.to_lowercase()` and
//!   `normalized_tags[i] == tags[i].to_lowercase()` for every `i`.
//!   Construct through [`PostRecord::new`] and the `with_*` setters and this
//!   holds automatically.
//!
//! - **SearchIndex**: every post id in `inverted` or `doc_lens` is `< posts.len()`,
//!   `total_docs == posts.len()`, and
//!   `avg_doc_len == sum(doc_lens) / total_docs` (0 for an empty index).
//!
//! [`SearchIndex::validate`] checks all of these.

use crate::fuzzy::TrigramIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Post id → raw term frequency in that post.
pub type Postings = HashMap<usize, usize>;

/// Stemmed term → postings.
pub type InvertedIndex = HashMap<String, Postings>;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One indexed post.
///
/// `link` is opaque to the search core: it's handed back to callers unchanged.
/// `content` is plain text (never markup) and feeds snippet extraction.
/// An empty `version` means the default, unversioned docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub title: String,
    pub normalized_title: String,
    pub link: String,
    pub description: String,
    pub tags: Vec<String>,
    pub normalized_tags: Vec<String>,
    pub content: String,
    pub version: String,
}

impl PostRecord {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            normalized_title: title.to_lowercase(),
            title,
            link: link.into(),
            description: String::new(),
            tags: Vec::new(),
            normalized_tags: Vec::new(),
            content: String::new(),
            version: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.normalized_tags = self.tags.iter().map(|t| t.to_lowercase()).collect();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Does this post carry `tag`? Expects an already-lowercased tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.normalized_tags.iter().any(|t| t == tag)
    }

    /// Title, description, tags and content joined for analysis.
    pub fn indexable_text(&self) -> String {
        let tags_len: usize = self.tags.iter().map(|t| t.len() + 1).sum();
        let mut text = String::with_capacity(
            self.title.len() + self.description.len() + tags_len + self.content.len() + 3,
        );
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.description);
        text.push(' ');
        for tag in &self.tags {
            text.push_str(tag);
            text.push(' ');
        }
        text.push_str(&self.content);
        text
    }
}

// =============================================================================
// INDEX
// =============================================================================

/// The complete searchable index.
///
/// A post's position in `posts` is its id everywhere else. The trigram index
/// used for fuzzy lookups is derived from `inverted` on first use and is not
/// part of the serialized shape, so an index that went through any faithful
/// round-trip of its fields searches exactly like the original.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    pub posts: Vec<PostRecord>,
    pub inverted: InvertedIndex,
    pub doc_lens: HashMap<usize, usize>,
    pub total_docs: usize,
    pub avg_doc_len: f64,
    /// Stem → the lowercase surface forms that produced it.
    #[serde(default)]
    pub stem_map: HashMap<String, Vec<String>>,
    #[serde(skip)]
    trigrams: OnceLock<TrigramIndex>,
}

impl SearchIndex {
    /// Assemble an index from prebuilt postings, computing `total_docs` and `avg_doc_len`.
    pub fn from_parts(
        posts: Vec<PostRecord>,
        inverted: InvertedIndex,
        doc_lens: HashMap<usize, usize>,
    ) -> Self {
        let total_docs = posts.len();
        let avg_doc_len = if total_docs == 0 {
            0.0
        } else {
            doc_lens.values().sum::<usize>() as f64 / total_docs as f64
        };
        Self {
            posts,
            inverted,
            doc_lens,
            total_docs,
            avg_doc_len,
            stem_map: HashMap::new(),
            trigrams: OnceLock::new(),
        }
    }

    pub fn with_stem_map(mut self, stem_map: HashMap<String, Vec<String>>) -> Self {
        self.stem_map = stem_map;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn post(&self, id: usize) -> Option<&PostRecord> {
        self.posts.get(id)
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.inverted.len()
    }

    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.inverted.get(term)
    }

    pub fn doc_len(&self, id: usize) -> usize {
        self.doc_lens.get(&id).copied().unwrap_or(0)
    }

    /// Trigram index over the vocabulary, built on first call.
    pub fn trigram_index(&self) -> &TrigramIndex {
        self.trigrams.get_or_init(|| {
            let index = TrigramIndex::from_inverted(&self.inverted);
            tracing::debug!(
                terms = index.term_count(),
                trigrams = index.len(),
                "built trigram index"
            );
            index
        })
    }

    /// Surface forms recorded for `stem`, if any.
    pub fn originals(&self, stem: &str) -> &[String] {
        self.stem_map.get(stem).map(Vec::as_slice).unwrap_or(&[])
    }
}

// =============================================================================
// QUERY AND RESULTS
// =============================================================================

/// A query split into free terms and quoted phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Analyzed (stemmed) free terms, in query order.
    pub terms: Vec<String>,
    /// Lowercased phrase text, quotes stripped.
    pub phrases: Vec<String>,
    /// The input as given.
    pub raw: String,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.phrases.is_empty()
    }
}

/// What users see when they get a search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Post id (index into `SearchIndex::posts`).
    pub id: usize,
    /// Display title, prefixed with `[version] ` when searching all versions.
    pub title: String,
    pub link: String,
    pub description: String,
    pub snippet: String,
    pub version: String,
    pub score: f64,
}
