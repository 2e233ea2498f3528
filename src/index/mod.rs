// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction and consistency checks.
//!
//! Building is two passes. The first analyzes every post independently (in
//! parallel with the `parallel` feature), the second merges per-post term
//! counts into one inverted index on a single thread. Post ids are positions
//! in the input, so the merge order doesn't affect the result.

mod build;
mod validate;
