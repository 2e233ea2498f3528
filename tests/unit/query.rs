//! Query parsing table.

use sitesearch::{parse_query, split_tag_filter};

#[test]
fn test_parse_table() {
    let cases: &[(&str, &[&str], &[&str])] = &[
        ("machine learning", &["machin", "learn"], &[]),
        ("\"machine learning\"", &[], &["machine learning"]),
        ("neural \"deep learning\" networks", &["neural", "network"], &["deep learning"]),
        (
            "\"machine learning\" and \"neural networks\"",
            &[],
            &["machine learning", "neural networks"],
        ),
        ("\"Upper Case\"", &[], &["upper case"]),
        ("open \"never closed", &["open"], &[]),
    ];
    for (raw, terms, phrases) in cases {
        let parsed = parse_query(raw);
        assert_eq!(parsed.terms, *terms, "{raw}");
        assert_eq!(parsed.phrases, *phrases, "{raw}");
        assert_eq!(parsed.raw, *raw);
    }
}

#[test]
fn test_tag_split_uses_first_space_only() {
    let q = split_tag_filter("tag:rust  double  spaced");
    assert_eq!(q.tag, Some("rust"));
    assert_eq!(q.rest, " double  spaced");
}
