// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Everything culminates here. The index is built, the analyzer agrees with
//! it, and now a query turns into a ranked, highlighted list of posts.
//! Exact terms score through BM25; terms the index has never seen fall back
//! to fuzzy expansion at a discount, so typos still find something.

mod engine;
pub mod snippet;

pub use engine::*;
pub use snippet::{extract_snippet, extract_snippet_with, highlight};
