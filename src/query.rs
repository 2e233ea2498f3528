// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: free terms, quoted phrases, and the `tag:` prefix.
//!
//! ```text
//! tag:rust neural "deep learning" networks
//! └──┬───┘ └──────────────┬───────────────┘
//!  filter            residual query
//!                  ├─ phrases: ["deep learning"]
//!                  └─ terms:   ["neural", "network"]
//! ```
//!
//! Quotes are toggles. An unterminated phrase is silently dropped: its words
//! become neither a phrase nor free terms. Phrases are trimmed, and an empty
//! or whitespace-only pair of quotes yields no phrase at all. Quoted text,
//! padding included, never leaks into the free terms. Parsing never fails.

use crate::analysis::{default_analyzer, Analyzer};
use crate::types::ParsedQuery;

/// Prefix that turns the first word of a query into a mandatory tag filter.
pub const TAG_PREFIX: &str = "tag:";

/// A query with its optional `tag:` filter split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery<'q> {
    /// Lowercased tag to filter on, if the query began with `tag:<name>`.
    pub tag: Option<&'q str>,
    /// Everything after the tag filter (possibly empty).
    pub rest: &'q str,
}

/// Split a lowercased query on a leading `tag:` filter.
///
/// Only the first space separates the filter from the rest. `tag:` with
/// nothing after it yields no filter.
///
/// ```
/// use sitesearch::split_tag_filter;
///
/// let q = split_tag_filter("tag:rust ownership rules");
/// assert_eq!(q.tag, Some("rust"));
/// assert_eq!(q.rest, "ownership rules");
/// ```
pub fn split_tag_filter(query: &str) -> TagQuery<'_> {
    let Some(after) = query.strip_prefix(TAG_PREFIX) else {
        return TagQuery {
            tag: None,
            rest: query,
        };
    };

    let (tag, rest) = after.split_once(' ').unwrap_or((after, ""));
    TagQuery {
        tag: (!tag.is_empty()).then_some(tag),
        rest,
    }
}

/// Parse a query with the default analyzer.
///
/// ```
/// use sitesearch::parse_query;
///
/// let parsed = parse_query(r#"neural "deep learning" networks"#);
/// assert_eq!(parsed.phrases, vec!["deep learning"]);
/// assert_eq!(parsed.terms, vec!["neural", "network"]);
/// ```
pub fn parse_query(raw: &str) -> ParsedQuery {
    parse_query_with(raw, default_analyzer())
}

/// Parse a query, normalizing free terms through `analyzer`.
pub fn parse_query_with(raw: &str, analyzer: &Analyzer) -> ParsedQuery {
    let mut phrases = Vec::new();
    let mut buf = String::new();
    let mut in_phrase = false;

    for c in raw.chars() {
        if c == '"' {
            if in_phrase {
                let phrase = buf.trim();
                if !phrase.is_empty() {
                    phrases.push(phrase.to_lowercase());
                }
                buf.clear();
            }
            in_phrase = !in_phrase;
        } else if in_phrase {
            buf.push(c);
        }
    }

    let free_text = strip_quoted(raw);
    let terms = analyzer.analyze(&free_text);

    ParsedQuery {
        terms,
        phrases,
        raw: raw.to_string(),
    }
}

/// Remove every quoted span (and an unterminated trailing one) from `raw`.
///
/// Each span becomes a single space so the words around it stay separate.
fn strip_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_phrase = false;
    for c in raw.chars() {
        if c == '"' {
            if in_phrase {
                out.push(' ');
            }
            in_phrase = !in_phrase;
        } else if !in_phrase {
            out.push(c);
        }
    }
    out
}
