// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A result's score is BM25 relevance over the free terms plus flat additive
//! boosts for phrases, title hits and tag hits. Boosts are large next to
//! typical BM25 values, so a title hit usually wins.

mod core;
pub mod ranking;

pub use core::*;
