//! Whole-pipeline scenarios: posts in, ranked results out.

use crate::common::{blog_index, ids, sample_index};
use sitesearch::{search, Searcher, VersionFilter};

#[test]
fn test_go_query_returns_only_go_guide() {
    let results = search(&sample_index(), "go", "all");
    assert_eq!(ids(&results), vec![0]);
    assert_eq!(results[0].title, "[v1] Go Guide");
    assert_eq!(results[0].link, "/posts/0");
    assert_eq!(results[0].description, "Learn Go");
}

#[test]
fn test_tag_query_returns_only_tagged_post() {
    assert_eq!(ids(&search(&sample_index(), "tag:rust", "all")), vec![1]);
}

#[test]
fn test_python_is_not_in_v1() {
    assert!(search(&sample_index(), "python", "v1").is_empty());
    assert_eq!(ids(&search(&sample_index(), "python", "v2")), vec![2]);
}

#[test]
fn test_single_term() {
    let results = search(&blog_index(), "ownership", "all");
    assert_eq!(ids(&results), vec![0]);
    assert_eq!(results[0].title, "[v2] Understanding Rust Ownership");
    assert_eq!(results[0].version, "v2");
}

#[test]
fn test_term_shared_by_two_posts() {
    let mut found = ids(&search(&blog_index(), "rust", "v2"));
    found.sort_unstable();
    assert_eq!(found, vec![0, 1]);
}

#[test]
fn test_unversioned_post_has_plain_title() {
    let results = search(&blog_index(), "release", "all");
    assert_eq!(ids(&results), vec![4]);
    assert_eq!(results[0].title, "Release Notes");
    assert_eq!(results[0].version, "");
}

#[test]
fn test_only_unversioned_posts() {
    let index = blog_index();
    let results = Searcher::new(&index).search("indexing", VersionFilter::Only(""));
    assert_eq!(ids(&results), vec![4]);
}

#[test]
fn test_stop_word_only_query_finds_nothing_without_title_hit() {
    assert!(search(&blog_index(), "which", "all").is_empty());
}

#[test]
fn test_empty_query() {
    assert!(search(&blog_index(), "", "all").is_empty());
    assert!(search(&blog_index(), "  ", "v1").is_empty());
}
