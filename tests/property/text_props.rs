//! Tokenizer, stemmer and parser properties.

use super::strategies::word_strategy;
use proptest::prelude::*;
use sitesearch::{default_analyzer, parse_query, stem, tokenize};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Stemming never lengthens a word and never empties a non-empty one.
    #[test]
    fn prop_stem_length_bound(word in word_strategy()) {
        let stemmed = stem(&word);
        prop_assert!(stemmed.len() <= word.len());
        prop_assert!(!stemmed.is_empty());
    }

    /// Tokens are non-empty runs of letters and digits, and tokenizing is pure.
    #[test]
    fn prop_tokens_are_alphanumeric(text in ".{0,80}") {
        let tokens = tokenize(&text);
        for token in &tokens {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(char::is_alphanumeric));
        }
        prop_assert_eq!(tokens, tokenize(&text));
    }

    /// Analyzed terms are lowercase, non-empty, and never stop words.
    #[test]
    fn prop_analyzed_terms_are_normalized(text in "[A-Za-z ,.]{0,80}") {
        for term in default_analyzer().analyze(&text) {
            prop_assert_eq!(term.to_lowercase(), term.clone());
            prop_assert!(!term.is_empty());
        }
    }

    /// Arbitrary input parses without panicking, and phrases are lowercase.
    #[test]
    fn prop_parse_never_panics(raw in ".{0,60}") {
        let parsed = parse_query(&raw);
        prop_assert_eq!(&parsed.raw, &raw);
        for phrase in &parsed.phrases {
            prop_assert!(!phrase.is_empty());
            prop_assert!(!phrase.contains('"'));
        }
    }

    /// Phrase words never leak into the free terms.
    #[test]
    fn prop_phrases_removed_from_terms(
        before in "[a-z]{3,8}",
        inside in "[a-z]{3,8}",
        after in "[a-z]{3,8}",
    ) {
        prop_assume!(inside != before && inside != after);
        let parsed = parse_query(&format!("{before} \"{inside}\" {after}"));
        prop_assert_eq!(parsed.phrases, vec![inside.clone()]);
        let inside_terms = default_analyzer().analyze(&inside);
        let outside_terms = default_analyzer().analyze(&format!("{before} {after}"));
        prop_assert_eq!(&parsed.terms, &outside_terms);
        for term in inside_terms {
            if !outside_terms.contains(&term) {
                prop_assert!(!parsed.terms.contains(&term));
            }
        }
    }
}

/// Very long tokens: runs of `y` (whose vowel status depends on the previous
/// letter) and long alternating vowel/consonant runs.
fn long_word() -> impl Strategy<Value = String> {
    prop_oneof![
        (1000usize..6000, prop::sample::select(vec!["", "ed", "ing", "s", "ies", "eed"]))
            .prop_map(|(n, suffix)| format!("{}{suffix}", "y".repeat(n))),
        (100usize..2000, 1usize..4).prop_map(|(n, pad)| format!("{}{}yyy", "b".repeat(pad), "ya".repeat(n))),
        prop::string::string_regex("([aeiouy]{1,40}[bcdlmnrstyz]{1,40}){50,120}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Long tokens stem in linear time and keep the length bound.
    #[test]
    fn prop_long_words_stem(word in long_word()) {
        let stemmed = stem(&word);
        prop_assert!(!stemmed.is_empty());
        prop_assert!(stemmed.len() <= word.len());
        prop_assert_eq!(default_analyzer().analyze(&word), vec![stemmed]);
    }
}
