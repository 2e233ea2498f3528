//! Edit distance and fuzzy matching tables.

use sitesearch::{fuzzy_match, levenshtein_distance, levenshtein_within};

#[test]
fn test_distance_table() {
    let cases = [
        ("kitten", "sitting", 3),
        ("saturday", "sunday", 3),
        ("go", "go", 0),
        ("", "test", 4),
        ("test", "", 4),
        ("abc", "abc", 0),
        ("abc", "abx", 1),
        ("transformer", "transfomer", 1),
        ("neural", "nural", 1),
        ("machine", "machne", 1),
        ("café", "cafe", 1),
    ];
    for (a, b, expected) in cases {
        assert_eq!(levenshtein_distance(a, b), expected, "{a} / {b}");
        assert!(levenshtein_within(a, b, expected));
        if expected > 0 {
            assert!(!levenshtein_within(a, b, expected - 1));
        }
    }
}

#[test]
fn test_fuzzy_match_table() {
    let cases = [
        ("transformer", "transformer", 0, true),
        ("transformer", "transfomer", 1, true),
        ("transformer", "transfrmer", 1, true),
        ("transformer", "tansformer", 1, true),
        ("neural", "nural", 1, true),
        ("machine", "machne", 1, true),
        ("machine", "macine", 1, true),
        ("machine", "machin", 1, true),
        ("abc", "xyz", 2, false),
        ("transformer", "transform", 2, true),
        ("transform", "transformer", 2, true),
        ("rust", "rusty", 0, false),
    ];
    for (term, target, max, expected) in cases {
        assert_eq!(fuzzy_match(term, target, max), expected, "{term} / {target} <= {max}");
    }
}
