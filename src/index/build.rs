// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::analysis::{default_analyzer, Analyzer};
use crate::types::{InvertedIndex, PostRecord, SearchIndex};
use std::collections::{BTreeSet, HashMap};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What one post contributes to the index.
#[derive(Debug, Default)]
struct PostTerms {
    freqs: HashMap<String, usize>,
    doc_len: usize,
    /// (stem, surface form) pairs, deduplicated.
    surfaces: BTreeSet<(String, String)>,
}

fn analyze_post(post: &PostRecord, analyzer: &Analyzer) -> PostTerms {
    let (stemmed, originals) = analyzer.analyze_with_originals(&post.indexable_text());
    let mut terms = PostTerms {
        doc_len: stemmed.len(),
        ..PostTerms::default()
    };
    for (stem, original) in stemmed.into_iter().zip(originals) {
        *terms.freqs.entry(stem.clone()).or_insert(0) += 1;
        terms.surfaces.insert((stem, original));
    }
    terms
}

#[cfg(feature = "parallel")]
fn analyze_all(posts: &[PostRecord], analyzer: &Analyzer) -> Vec<PostTerms> {
    posts.par_iter().map(|p| analyze_post(p, analyzer)).collect()
}

#[cfg(not(feature = "parallel"))]
fn analyze_all(posts: &[PostRecord], analyzer: &Analyzer) -> Vec<PostTerms> {
    posts.iter().map(|p| analyze_post(p, analyzer)).collect()
}

impl SearchIndex {
    /// Build an index with the default analyzer.
    ///
    /// ```
    /// use sitesearch::{PostRecord, SearchIndex};
    ///
    /// let index = SearchIndex::build(vec![
    ///     PostRecord::new("Rust Guide", "/rust").with_content("Ownership and borrowing"),
    /// ]);
    /// assert_eq!(index.total_docs, 1);
    /// assert!(index.postings("borrow").is_some());
    /// ```
    pub fn build(posts: Vec<PostRecord>) -> Self {
        Self::build_with(posts, default_analyzer())
    }

    /// Build an index, analyzing title, description, tags and content with `analyzer`.
    ///
    /// A post's document length is the number of terms the analyzer kept.
    /// Queries must go through an analyzer with the same settings or their
    /// terms won't line up with the index.
    pub fn build_with(posts: Vec<PostRecord>, analyzer: &Analyzer) -> Self {
        let analyzed = analyze_all(&posts, analyzer);

        let mut inverted = InvertedIndex::new();
        let mut doc_lens = HashMap::with_capacity(posts.len());
        let mut surfaces: HashMap<String, BTreeSet<String>> = HashMap::new();

        for (post_id, terms) in analyzed.into_iter().enumerate() {
            doc_lens.insert(post_id, terms.doc_len);
            for (term, freq) in terms.freqs {
                inverted.entry(term).or_default().insert(post_id, freq);
            }
            for (stem, original) in terms.surfaces {
                surfaces.entry(stem).or_default().insert(original);
            }
        }

        let stem_map = surfaces
            .into_iter()
            .map(|(stem, forms)| (stem, forms.into_iter().collect()))
            .collect();

        let index = Self::from_parts(posts, inverted, doc_lens).with_stem_map(stem_map);
        tracing::debug!(
            posts = index.total_docs,
            terms = index.term_count(),
            avg_doc_len = index.avg_doc_len,
            "built search index"
        );
        index
    }
}
