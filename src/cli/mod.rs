// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesearch command-line interface.
//!
//! Three subcommands: `search` to query a corpus, `inspect` to examine the
//! index built from it, and `stem` to see what the stemmer does to a word.
//! The index is rebuilt from the posts file on every run.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitesearch",
    about = "Full-text search over a static site's posts",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that builds an index.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// JSON array of posts
    #[arg(short, long)]
    pub posts: PathBuf,

    /// Keep stop words in the index and in queries
    #[arg(long)]
    pub no_stop_words: bool,

    /// Index and query surface forms instead of stems
    #[arg(long)]
    pub no_stemming: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search posts and display ranked results
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Search query (supports "quoted phrases" and a leading tag:<name>)
        query: String,

        /// Version to search, or "all"
        #[arg(long, default_value = "all")]
        version: String,

        /// JSON file overriding ranking and snippet settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of results (overrides the config file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the index and print its shape
    Inspect {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// How many of the most frequent terms to list
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Print the stem of each word
    Stem {
        /// Words to stem
        #[arg(required = true)]
        words: Vec<String>,
    },
}
