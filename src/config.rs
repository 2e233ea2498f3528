// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tuning knobs.
//!
//! Every field has a default that reproduces the stock ranking, and any
//! subset can be overridden from a JSON file:
//!
//! ```json
//! { "maxResults": 25, "fuzzy": false }
//! ```

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// BM25 term-frequency saturation.
pub const DEFAULT_K1: f64 = 1.2;
/// BM25 length normalization.
pub const DEFAULT_B: f64 = 0.75;
pub const DEFAULT_MAX_RESULTS: usize = 10;

pub const TITLE_BOOST: f64 = 10.0;
pub const TAG_BOOST: f64 = 5.0;
/// Per phrase found in the content. Doubled when the phrase is in the title.
pub const PHRASE_BOOST: f64 = 15.0;
/// Multiplier applied to BM25 scores earned through fuzzy matches.
pub const FUZZY_MODIFIER: f64 = 0.7;

pub const SNIPPET_LENGTH: usize = 150;
pub const SNIPPET_CONTEXT_BEFORE: usize = 60;
pub const SNIPPET_CONTEXT_AFTER: usize = 90;
/// Content beyond this many characters is ignored by snippet extraction.
pub const MAX_SNIPPET_CONTENT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchConfig {
    pub k1: f64,
    pub b: f64,
    pub max_results: usize,
    pub title_boost: f64,
    pub tag_boost: f64,
    pub phrase_boost: f64,
    /// Fall back to fuzzy matching for terms missing from the index.
    pub fuzzy: bool,
    pub max_edit_distance: usize,
    pub fuzzy_modifier: f64,
    pub snippet_length: usize,
    pub context_before: usize,
    pub context_after: usize,
    pub max_snippet_content: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
            max_results: DEFAULT_MAX_RESULTS,
            title_boost: TITLE_BOOST,
            tag_boost: TAG_BOOST,
            phrase_boost: PHRASE_BOOST,
            fuzzy: true,
            max_edit_distance: crate::fuzzy::MAX_EDIT_DISTANCE,
            fuzzy_modifier: FUZZY_MODIFIER,
            snippet_length: SNIPPET_LENGTH,
            context_before: SNIPPET_CONTEXT_BEFORE,
            context_after: SNIPPET_CONTEXT_AFTER,
            max_snippet_content: MAX_SNIPPET_CONTENT,
        }
    }
}

impl SearchConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::json("search config", e))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        serde_json::from_str(&text)
            .map_err(|e| LoadError::json(path.display().to_string(), e))
    }
}
