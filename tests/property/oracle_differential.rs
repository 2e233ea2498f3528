//! Differential testing: optimized implementations against simple oracles.

use super::strategies::word_strategy;
use proptest::prelude::*;
use sitesearch::{fuzzy_expand, levenshtein_distance, levenshtein_within, InvertedIndex, TrigramIndex};
use std::collections::HashMap;

fn any_word() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        prop::string::string_regex("[a-zé中ü]{0,6}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Two-row Levenshtein matches strsim.
    #[test]
    fn diff_levenshtein_vs_strsim(a in any_word(), b in any_word()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Bounded check agrees with the full distance.
    #[test]
    fn diff_within_vs_distance(a in any_word(), b in any_word(), max in 0usize..5) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), levenshtein_distance(&a, &b) <= max);
    }

    /// Trigram expansion never returns a term the brute-force scan would reject.
    #[test]
    fn diff_trigram_subset_of_brute_force(
        vocab in prop::collection::vec(word_strategy(), 0..40),
        query in word_strategy(),
        max in 0usize..3,
    ) {
        let inverted: InvertedIndex = vocab
            .iter()
            .map(|t| (t.clone(), HashMap::from([(0usize, 1usize)])))
            .collect();
        let fast = TrigramIndex::from_inverted(&inverted).expand(&query, max);
        let slow = fuzzy_expand(&query, &inverted, max);
        for term in &fast {
            prop_assert!(slow.contains(term), "{} not in brute force for {}", term, query);
        }
    }

    /// A vocabulary term is always found for itself.
    #[test]
    fn diff_trigram_finds_exact_term(vocab in prop::collection::vec(word_strategy(), 1..20), pick in any::<prop::sample::Index>()) {
        let term = pick.get(&vocab).clone();
        let index = TrigramIndex::build(vocab.iter().map(String::as_str));
        prop_assert!(index.expand(&term, 0).contains(&term));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Metric laws: identity, symmetry, triangle inequality.
    #[test]
    fn prop_levenshtein_is_a_metric(a in any_word(), b in any_word(), c in any_word()) {
        prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        prop_assert!(
            levenshtein_distance(&a, &c) <= levenshtein_distance(&a, &b) + levenshtein_distance(&b, &c)
        );
        let longer = a.chars().count().max(b.chars().count());
        let diff = a.chars().count().abs_diff(b.chars().count());
        let d = levenshtein_distance(&a, &b);
        prop_assert!(diff <= d && d <= longer);
    }
}
