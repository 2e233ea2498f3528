// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading posts from JSON.
//!
//! A corpus file is a JSON array of post objects. Only `title` and `link`
//! are required:
//!
//! ```json
//! [
//!   { "title": "Go Guide", "link": "/go", "tags": ["go"], "version": "v1",
//!     "description": "Learn Go", "content": "A guide to Go programming" }
//! ]
//! ```

use crate::error::LoadError;
use crate::types::PostRecord;
use serde::Deserialize;
use std::path::Path;

/// One post as it appears on disk. Normalized fields are derived, never read.
#[derive(Debug, Clone, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub version: String,
}

impl From<PostInput> for PostRecord {
    fn from(input: PostInput) -> Self {
        PostRecord::new(input.title, input.link)
            .with_description(input.description)
            .with_tags(input.tags)
            .with_content(input.content)
            .with_version(input.version)
    }
}

/// Parse a JSON array of posts.
pub fn parse_posts(json: &str) -> Result<Vec<PostRecord>, LoadError> {
    let inputs: Vec<PostInput> =
        serde_json::from_str(json).map_err(|e| LoadError::json("posts", e))?;
    Ok(inputs.into_iter().map(PostRecord::from).collect())
}

/// Read and parse a JSON array of posts from `path`.
pub fn load_posts(path: &Path) -> Result<Vec<PostRecord>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let inputs: Vec<PostInput> = serde_json::from_str(&text)
        .map_err(|e| LoadError::json(path.display().to_string(), e))?;
    tracing::debug!(path = %path.display(), posts = inputs.len(), "loaded posts");
    Ok(inputs.into_iter().map(PostRecord::from).collect())
}
