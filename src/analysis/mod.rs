// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: raw text in, normalized terms out.
//!
//! Every string that touches the index passes through here twice: once when a
//! post is indexed and once when a query is parsed. Both sides must agree on
//! the exact same pipeline, otherwise a perfectly good match turns into a miss.
//!
//! ```text
//! text ──▶ tokenize ──▶ lowercase ──▶ len ≥ 2 ──▶ stop words ──▶ stem ──▶ terms
//! ```

mod analyzer;
pub mod stemmer;
mod stop_words;
mod tokenizer;

pub use analyzer::*;
pub use stemmer::stem;
pub use stop_words::{is_stop_word, STOP_WORDS};
pub use tokenizer::*;
