// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two layers here: a Levenshtein distance for comparing one pair of strings,
//! and a trigram index that keeps us from running that comparison against
//! every term in the vocabulary.

mod levenshtein;
mod trigram;

pub use levenshtein::*;
pub use trigram::*;
