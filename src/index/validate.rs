// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural checks for indexes that came from somewhere other than
//! [`SearchIndex::build`] (deserialized from disk, assembled by hand).

use crate::error::IndexError;
use crate::types::SearchIndex;

/// Tolerance for comparing the stored average against a recomputed one.
const AVG_EPSILON: f64 = 1e-9;

impl SearchIndex {
    /// Check that the index's fields agree with each other.
    ///
    /// Returns the first problem found. Term order is sorted so the reported
    /// error is deterministic.
    pub fn validate(&self) -> Result<(), IndexError> {
        let num_posts = self.posts.len();

        for (post_id, post) in self.posts.iter().enumerate() {
            if post.normalized_title != post.title.to_lowercase() {
                return Err(IndexError::UnnormalizedTitle {
                    post_id,
                    actual: post.normalized_title.clone(),
                });
            }
            let tags_ok = post.normalized_tags.len() == post.tags.len()
                && post
                    .tags
                    .iter()
                    .zip(&post.normalized_tags)
                    .all(|(tag, norm)| *norm == tag.to_lowercase());
            if !tags_ok {
                return Err(IndexError::UnnormalizedTags {
                    post_id,
                    actual: post.normalized_tags.clone(),
                });
            }
        }

        let mut terms: Vec<&String> = self.inverted.keys().collect();
        terms.sort_unstable();
        for term in terms {
            let mut postings: Vec<(&usize, &usize)> = self.inverted[term].iter().collect();
            postings.sort_unstable();
            for (&post_id, &freq) in postings {
                if post_id >= num_posts {
                    return Err(IndexError::InvalidPostingId {
                        term: term.clone(),
                        post_id,
                        num_posts,
                    });
                }
                if freq == 0 {
                    return Err(IndexError::ZeroFrequency {
                        term: term.clone(),
                        post_id,
                    });
                }
            }
        }

        if let Some(&post_id) = self.doc_lens.keys().filter(|&&id| id >= num_posts).min() {
            return Err(IndexError::InvalidDocLenId { post_id, num_posts });
        }

        if self.total_docs != num_posts {
            return Err(IndexError::IncorrectTotalDocs {
                expected: num_posts,
                actual: self.total_docs,
            });
        }

        let expected = if num_posts == 0 {
            0.0
        } else {
            self.doc_lens.values().sum::<usize>() as f64 / num_posts as f64
        };
        if (self.avg_doc_len - expected).abs() > AVG_EPSILON {
            return Err(IndexError::IncorrectAvgDocLen {
                expected,
                actual: self.avg_doc_len,
            });
        }

        Ok(())
    }
}
