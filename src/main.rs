// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use sitesearch::{load_posts, Analyzer, SearchConfig, SearchIndex, Searcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, GRAY, GREEN};
use cli::{Cli, Commands, CorpusArgs};

/// Environment variable read for log directives, e.g. `SITESEARCH_LOG=sitesearch=trace`.
const LOG_ENV: &str = "SITESEARCH_LOG";

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "sitesearch=debug",
        _ => "sitesearch=trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            corpus,
            query,
            version,
            config,
            limit,
            json,
        } => {
            let mut config = match config {
                Some(path) => SearchConfig::from_json_file(&path)?,
                None => SearchConfig::default(),
            };
            if let Some(limit) = limit {
                config.max_results = limit;
            }
            let analyzer = analyzer_for(&corpus);
            let index = build_index(&corpus, &analyzer)?;
            let results = Searcher::new(&index)
                .with_analyzer(&analyzer)
                .with_config(config)
                .search(&query, version.as_str());

            if json {
                let out = serde_json::to_string_pretty(&results).context("serializing results")?;
                println!("{}", out);
                return Ok(());
            }

            display::section_top(&format!("SEARCH \"{}\"", display::truncate(&query, 50)));
            if results.is_empty() {
                display::row(&format!(" {}", themed(GRAY, &[], "no results")));
            }
            for (rank, result) in results.iter().enumerate() {
                display::result_block(rank + 1, result);
            }
            display::section_bot();
        }

        Commands::Inspect { corpus, top } => {
            let analyzer = analyzer_for(&corpus);
            let index = build_index(&corpus, &analyzer)?;
            index.validate().with_context(|| {
                format!("index built from {} is inconsistent", corpus.posts.display())
            })?;
            inspect(&index, top);
        }

        Commands::Stem { words } => {
            for word in words {
                let lower = word.to_lowercase();
                println!("{} {}", lower, themed(GREEN, &[BOLD], &sitesearch::stem(&lower)));
            }
        }
    }
    Ok(())
}

fn analyzer_for(corpus: &CorpusArgs) -> Analyzer {
    Analyzer::new(!corpus.no_stop_words, !corpus.no_stemming)
}

fn build_index(corpus: &CorpusArgs, analyzer: &Analyzer) -> Result<SearchIndex> {
    let posts = load_posts(&corpus.posts)
        .with_context(|| format!("loading posts from {}", corpus.posts.display()))?;

    #[cfg(feature = "parallel")]
    let progress = spinner(posts.len());
    let index = SearchIndex::build_with(posts, analyzer);
    #[cfg(feature = "parallel")]
    progress.finish_and_clear();

    Ok(index)
}

#[cfg(feature = "parallel")]
fn spinner(posts: usize) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
    use std::time::Duration;

    let pb = ProgressBar::new_spinner();
    if !atty::is(atty::Stream::Stderr) {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("indexing {} posts", posts));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn inspect(index: &SearchIndex, top: usize) {
    display::section_top("INDEX");
    display::field("posts", &index.total_docs.to_string());
    display::field("terms", &index.term_count().to_string());
    display::field("avg doc len", &format!("{:.2}", index.avg_doc_len));
    display::field("trigrams", &index.trigram_index().len().to_string());

    let mut versions: Vec<&str> = index.posts.iter().map(|p| p.version.as_str()).collect();
    versions.sort_unstable();
    versions.dedup();
    let versions: Vec<&str> = versions
        .into_iter()
        .map(|v| if v.is_empty() { "(none)" } else { v })
        .collect();
    display::field("versions", &versions.join(", "));

    let mut terms: Vec<(&String, usize)> = index
        .inverted
        .iter()
        .map(|(term, postings)| (term, postings.values().sum()))
        .collect();
    terms.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    display::section_bot();

    display::section_top("TOP TERMS");
    for (term, count) in terms.into_iter().take(top) {
        let df = index.postings(term).map_or(0, |p| p.len());
        display::row(&format!(
            " {} {:>6} occurrences in {:>4} posts",
            themed(CYAN, &[], &format!("{:<24}", term)),
            count,
            df
        ));
    }
    display::section_bot();
}
