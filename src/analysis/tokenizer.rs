// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word extraction.
//!
//! A token is a maximal run of Unicode letters and digits. Everything else
//! (whitespace, punctuation, symbols) is a separator and never ends up inside
//! a token. Case is preserved here; lowercasing is the analyzer's job.

/// Minimum token length (in characters) that survives analysis.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Word boundary detection: anything that isn't a letter or digit separates words.
#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Iterate over the tokens of `text` without allocating.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_boundary).filter(|t| !t.is_empty())
}

/// Split text into tokens, preserving case.
///
/// ```
/// use sitesearch::tokenize;
///
/// assert_eq!(
///     tokenize("go-lang is awesome (really)"),
///     vec!["go", "lang", "is", "awesome", "really"],
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity((text.len() / 5).max(8));
    out.extend(tokens(text).map(str::to_string));
    out
}

/// Does this token meet the minimum length? Counts characters, not bytes.
#[inline]
pub fn is_long_enough(token: &str) -> bool {
    token.chars().nth(MIN_TOKEN_CHARS - 1).is_some()
}
