//! Index construction: postings, lengths, stem map, validation.

use crate::common::{blog_corpus, blog_index};
use sitesearch::{default_analyzer, search, stem, Analyzer, IndexError, PostRecord, SearchIndex};

#[test]
fn test_blog_index_is_well_formed() {
    let index = blog_index();
    assert_eq!(index.total_docs, 5);
    assert_eq!(index.validate(), Ok(()));
}

#[test]
fn test_doc_len_counts_analyzed_tokens() {
    let corpus = blog_corpus();
    let index = blog_index();
    for (id, post) in corpus.iter().enumerate() {
        let expected = default_analyzer().analyze(&post.indexable_text()).len();
        assert_eq!(index.doc_len(id), expected, "post {id}");
    }
}

#[test]
fn test_postings_sum_to_doc_len() {
    let index = blog_index();
    for id in 0..index.total_docs {
        let total: usize = index
            .inverted
            .values()
            .filter_map(|postings| postings.get(&id))
            .sum();
        assert_eq!(total, index.doc_len(id));
    }
}

#[test]
fn test_tags_and_description_are_indexed() {
    let index = blog_index();
    // "memory" appears only as a tag of post 0
    let postings = index.postings("memori").expect("tag term indexed");
    assert_eq!(postings.keys().copied().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_stem_map_is_sorted_and_deduplicated() {
    let index = blog_index();
    assert_eq!(index.originals("comput"), ["compute", "computing"]);
    for forms in index.stem_map.values() {
        let mut sorted = forms.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(&sorted, forms);
    }
}

#[test]
fn test_every_stem_map_key_is_indexed() {
    let index = blog_index();
    for stem in index.stem_map.keys() {
        assert!(index.postings(stem).is_some(), "{stem}");
    }
}

#[test]
fn test_analyzer_settings_change_vocabulary() {
    let raw = SearchIndex::build_with(blog_corpus(), &Analyzer::new(false, false));
    let full = blog_index();
    assert!(raw.postings("the").is_some());
    assert!(full.postings("the").is_none());
    assert!(raw.postings("networking").is_some());
    assert!(full.postings("networking").is_none());
    assert!(raw.avg_doc_len > full.avg_doc_len);
}

#[test]
fn test_validate_catches_hand_edits() {
    let mut index = blog_index();
    index.posts.pop();
    assert!(matches!(
        index.validate(),
        Err(IndexError::InvalidPostingId { .. }) | Err(IndexError::InvalidDocLenId { .. })
    ));
}

#[test]
fn test_pathological_tokens_index_and_search() {
    let y_run = format!("{}ed", "y".repeat(50_000));
    let mixed = "yay".repeat(20_000);
    let posts = vec![
        PostRecord::new("Long Words", "/long").with_content(format!("{y_run} rust {mixed}")),
        PostRecord::new("Rust Guide", "/rust").with_content("rust ownership"),
    ];
    let index = SearchIndex::build(posts);
    assert_eq!(index.validate(), Ok(()));

    let y_stem = stem(&y_run);
    assert!(y_stem.len() <= y_run.len());
    assert!(index.postings(&y_stem).is_some());
    assert!(index.postings(&stem(&mixed)).is_some());

    assert_eq!(search(&index, "rust", "all").len(), 2);
    assert!(search(&index, &"y".repeat(20_000), "all").is_empty());
}
