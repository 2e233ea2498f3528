// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction and match highlighting.
//!
//! A snippet is a window of the post's content around the earliest match:
//!
//! ```text
//!            60 chars            90 chars
//!  ... ◀──────────────────▶ fox ◀────────────────────────────▶ ...
//!                        earliest
//!                         match
//! ```
//!
//! All offsets are in characters, never bytes, so a window can't split a
//! multi-byte character. Highlighting is a single left-to-right pass that
//! tries the longest candidate first, so `<b>` markers never nest.

use crate::config::SearchConfig;

pub const HIGHLIGHT_OPEN: &str = "<b>";
pub const HIGHLIGHT_CLOSE: &str = "</b>";
const ELLIPSIS: &str = "...";

/// Extract a highlighted snippet with the default window sizes.
///
/// ```
/// use sitesearch::extract_snippet;
///
/// let snippet = extract_snippet("The quick brown fox jumps over the lazy dog.", &["fox"]);
/// assert!(snippet.contains("<b>fox</b>"));
/// ```
pub fn extract_snippet<S: AsRef<str>>(content: &str, terms: &[S]) -> String {
    extract_snippet_with(content, terms, &SearchConfig::default())
}

/// Extract a highlighted snippet using the window sizes in `config`.
///
/// With no terms, or none found, returns the leading `snippet_length`
/// characters (plus `...` if cut).
pub fn extract_snippet_with<S: AsRef<str>>(
    content: &str,
    terms: &[S],
    config: &SearchConfig,
) -> String {
    let chars: Vec<char> = content.chars().take(config.max_snippet_content).collect();

    let terms: Vec<Vec<char>> = terms
        .iter()
        .map(|t| t.as_ref().chars().map(fold).collect::<Vec<char>>())
        .filter(|t| !t.is_empty())
        .collect();

    let folded: Vec<char> = chars.iter().copied().map(fold).collect();
    let Some(first) = terms.iter().filter_map(|t| find(&folded, t)).min() else {
        return leading(&chars, config.snippet_length);
    };

    let start = first.saturating_sub(config.context_before);
    let end = first.saturating_add(config.context_after).min(chars.len());

    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    highlight_into(&mut out, &chars[start..end], &highlight_forms(&terms));
    if end < chars.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Wrap every occurrence of each term (and its title-cased form) in `text`.
pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    let terms: Vec<Vec<char>> = terms
        .iter()
        .map(|t| t.as_ref().chars().collect::<Vec<char>>())
        .filter(|t| !t.is_empty())
        .collect();
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    highlight_into(&mut out, &chars, &highlight_forms(&terms));
    out
}

/// Title-case a word: first character uppercased, the rest untouched.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase one character without changing the character count.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn leading(chars: &[char], len: usize) -> String {
    if chars.len() > len {
        let mut out: String = chars[..len].iter().collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        chars.iter().collect()
    }
}

/// Each term as given and title-cased, deduplicated, longest first.
fn highlight_forms(terms: &[Vec<char>]) -> Vec<Vec<char>> {
    let mut forms: Vec<Vec<char>> = Vec::with_capacity(terms.len() * 2);
    for term in terms {
        let text: String = term.iter().collect();
        forms.push(term.clone());
        forms.push(title_case(&text).chars().collect());
    }
    forms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    forms.dedup();
    forms
}

fn highlight_into(out: &mut String, text: &[char], forms: &[Vec<char>]) {
    let mut i = 0;
    while i < text.len() {
        match forms.iter().find(|f| text[i..].starts_with(f)) {
            Some(form) => {
                out.push_str(HIGHLIGHT_OPEN);
                out.extend(form.iter());
                out.push_str(HIGHLIGHT_CLOSE);
                i += form.len();
            }
            None => {
                out.push(text[i]);
                i += 1;
            }
        }
    }
}
