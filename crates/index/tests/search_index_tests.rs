//! Contract tests for the built search index
//!
//! Three small records exercise every lookup path:
//!
//! 1. **String matches** - word-level, case-insensitive, query tokenized
//! 2. **Integer and boolean matches** - exact, never crossing kinds
//! 3. **Filters** - restrict_field and restrict_type
//! 4. **Isolation** - returned lists are copies, readers share the index

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use zdsearch_core::{Error, Record, Value};
use zdsearch_index::{IndexBuilder, Match, SearchIndex, Tokenizer, TokenizerConfig};

// ============================================================================
// Test Helpers
// ============================================================================

fn record(pairs: Vec<(&str, Value)>) -> Arc<Record> {
    Arc::new(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn strings(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|s| Value::from(*s)).collect())
}

fn o1() -> Arc<Record> {
    record(vec![
        ("oink", Value::Int(3)),
        ("bork", Value::from("Some super long and DESCRIPTIVE (& useful!) text")),
        ("quark", Value::from("Less borkey text")),
        ("is_quack", Value::Bool(true)),
        ("honk", strings(&["Other", "Pieces"])),
        ("eek", Value::Int(4)),
        ("_type", Value::from("eel")),
    ])
}

fn o2() -> Arc<Record> {
    record(vec![
        ("oink", Value::Int(34)),
        ("bork", Value::from("LESS USEFUL but more interesting text.")),
        ("quark", Value::from("Definitely does not have the t-word.")),
        ("is_quack", Value::Bool(false)),
        ("honk", strings(&["Other", "Pieces"])),
        ("eek", Value::Int(1)),
        ("_type", Value::from("eel")),
    ])
}

fn o3() -> Arc<Record> {
    record(vec![
        ("oink", Value::Int(34)),
        (
            "bork",
            Value::from("definitely borks (and barks, can't it?) pretty hard and is useful."),
        ),
        ("quark", Value::from("")),
        ("is_quack", Value::Bool(true)),
        ("honk", strings(&["Other", "Pieces"])),
        ("eek", Value::Int(0)),
        ("_type", Value::from("salmon")),
    ])
}

fn build(records: &[Arc<Record>]) -> SearchIndex {
    let mut builder = IndexBuilder::default();
    builder.index_all(records.iter().cloned()).unwrap();
    builder.build()
}

fn assert_same_matches(actual: Vec<Match>, expected: Vec<Match>) {
    assert_eq!(actual.len(), expected.len(), "got {:?}", actual);
    for m in &expected {
        assert!(actual.contains(m), "missing {:?} in {:?}", m, actual);
    }
}

// ============================================================================
// String matches
// ============================================================================

#[test]
fn test_exact_word_match() {
    let r1 = o1();
    let index = build(&[r1.clone()]);
    let matches = index.matches_for(&Value::from("long"), None, None).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(*matches[0].record, *r1);
    assert_eq!(matches[0].field, "bork");
}

#[test]
fn test_multiple_matches() {
    let (r1, r2) = (o1(), o2());
    let index = build(&[r1.clone(), r2.clone()]);
    let matches = index.matches_for(&Value::from("text"), None, None).unwrap();
    assert_same_matches(
        matches,
        vec![
            Match::new(r1.clone(), "bork"),
            Match::new(r1, "quark"),
            Match::new(r2, "bork"),
        ],
    );
}

#[test]
fn test_no_matches() {
    let index = build(&[o1(), o2()]);
    assert!(index
        .matches_for(&Value::from("hypothetical"), None, None)
        .unwrap()
        .is_empty());
}

#[test]
fn test_query_is_tokenized_like_the_index() {
    let (r1, r2) = (o1(), o2());
    let index = build(&[r1.clone(), r2.clone()]);
    let matches = index.matches_for(&Value::from("TeXT..."), None, None).unwrap();
    assert_same_matches(
        matches,
        vec![
            Match::new(r1.clone(), "bork"),
            Match::new(r1, "quark"),
            Match::new(r2, "bork"),
        ],
    );
}

#[test]
fn test_only_first_query_token_is_used() {
    let (r1, r2) = (o1(), o2());
    let index = build(&[r1.clone(), r2]);
    let matches = index
        .matches_for(&Value::from("borkey hypothetical"), None, None)
        .unwrap();
    assert_same_matches(matches, vec![Match::new(r1, "quark")]);
}

#[test]
fn test_empty_string_finds_empty_fields() {
    let r3 = o3();
    let index = build(&[o1(), o2(), r3.clone()]);
    let matches = index.matches_for(&Value::from(""), None, None).unwrap();
    assert_same_matches(matches, vec![Match::new(r3, "quark")]);
}

#[test]
fn test_empty_array_is_searchable_as_empty_string() {
    let r = record(vec![
        ("_type", Value::from("user")),
        ("tags", Value::Array(vec![])),
    ]);
    let index = build(&[r.clone()]);
    let matches = index.matches_for(&Value::from(""), Some("tags"), None).unwrap();
    assert_same_matches(matches, vec![Match::new(r, "tags")]);
}

// ============================================================================
// Integer and boolean matches
// ============================================================================

#[test]
fn test_exact_integer_matches() {
    let (r2, r3) = (o2(), o3());
    let index = build(&[o1(), r2.clone(), r3.clone()]);
    let matches = index.matches_for(&Value::Int(34), None, None).unwrap();
    assert_same_matches(matches, vec![Match::new(r2, "oink"), Match::new(r3, "oink")]);
    assert!(index.matches_for(&Value::Int(345), None, None).unwrap().is_empty());
}

#[test]
fn test_exact_boolean_matches() {
    let (r1, r3) = (o1(), o3());
    let index = build(&[r1.clone(), o2(), r3.clone()]);
    let matches = index
        .matches_for(&Value::Bool(true), Some("is_quack"), None)
        .unwrap();
    assert_same_matches(
        matches,
        vec![Match::new(r1, "is_quack"), Match::new(r3, "is_quack")],
    );
}

#[test]
fn test_boolean_miss() {
    let index = build(&[o1(), o3()]);
    assert!(index
        .matches_for(&Value::Bool(false), Some("is_quack"), None)
        .unwrap()
        .is_empty());
}

#[test]
fn test_booleans_never_match_integers() {
    let (r2, r3) = (o2(), o3());
    let index = build(&[o1(), r2.clone(), r3.clone()]);

    let matches = index.matches_for(&Value::Bool(false), None, None).unwrap();
    assert!(!matches.contains(&Match::new(r3.clone(), "eek")));
    assert_same_matches(matches, vec![Match::new(r2, "is_quack")]);

    let zeros = index.matches_for(&Value::Int(0), None, None).unwrap();
    assert_same_matches(zeros, vec![Match::new(r3, "eek")]);
}

#[test]
fn test_integer_string_does_not_match_integer() {
    let index = build(&[o1(), o2(), o3()]);
    assert!(index
        .matches_for(&Value::from("34"), None, None)
        .unwrap()
        .is_empty());
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_restrict_field() {
    let (r1, r2) = (o1(), o2());
    let index = build(&[r1.clone(), r2.clone()]);
    let matches = index
        .matches_for(&Value::from("text"), Some("bork"), None)
        .unwrap();
    assert_same_matches(matches, vec![Match::new(r1, "bork"), Match::new(r2, "bork")]);
}

#[test]
fn test_restrict_type() {
    let r3 = o3();
    let index = build(&[o1(), o2(), r3.clone()]);
    let matches = index
        .matches_for(&Value::from("useful"), None, Some("salmon"))
        .unwrap();
    assert_same_matches(matches, vec![Match::new(r3, "bork")]);
}

#[test]
fn test_restrict_type_and_field_together() {
    let (r1, r2) = (o1(), o2());
    let index = build(&[r1.clone(), r2.clone(), o3()]);
    let matches = index
        .matches_for(&Value::from("useful"), Some("bork"), Some("eel"))
        .unwrap();
    assert_same_matches(matches, vec![Match::new(r1, "bork"), Match::new(r2, "bork")]);
}

#[test]
fn test_unknown_type_yields_nothing() {
    let index = build(&[o1(), o2(), o3()]);
    assert!(index
        .matches_for(&Value::from("text"), None, Some("trout"))
        .unwrap()
        .is_empty());
}

// ============================================================================
// Literal fields
// ============================================================================

#[test]
fn test_literal_fields_index_and_query_verbatim() {
    let tokenizer = Tokenizer::new(&TokenizerConfig {
        literal_fields: vec!["email".to_string()],
        ..TokenizerConfig::default()
    })
    .unwrap();
    let mut builder = IndexBuilder::new(Arc::new(tokenizer));
    let user = record(vec![
        ("_type", Value::from("user")),
        ("email", Value::from("Bob@Example.com")),
        ("signature", Value::from("Bob@Example.com")),
    ]);
    builder.index(user.clone()).unwrap();
    let index = builder.build();

    let hits = index
        .matches_for(&Value::from("Bob@Example.com"), Some("email"), None)
        .unwrap();
    assert_same_matches(hits, vec![Match::new(user.clone(), "email")]);

    assert!(index
        .matches_for(&Value::from("bob"), Some("email"), None)
        .unwrap()
        .is_empty());
    let words = index
        .matches_for(&Value::from("bob"), Some("signature"), None)
        .unwrap();
    assert_same_matches(words, vec![Match::new(user, "signature")]);
}

// ============================================================================
// Errors and isolation
// ============================================================================

#[test]
fn test_unsupported_query_term() {
    let index = build(&[o1()]);
    let err = index.matches_for(&Value::Null, None, None).unwrap_err();
    assert!(matches!(err, Error::UnsupportedValueType { type_name: "Null", .. }));
}

#[test]
fn test_record_with_nested_object_is_skipped_whole() {
    let mut builder = IndexBuilder::default();
    builder.index(o1()).unwrap();
    let bad = record(vec![
        ("_type", Value::from("eel")),
        ("bork", Value::from("unrelated words")),
        ("nested", Value::Object(BTreeMap::new())),
    ]);
    assert!(builder.index(bad).is_err());
    assert_eq!(builder.records_indexed(), 1);

    let index = builder.build();
    assert!(index
        .matches_for(&Value::from("unrelated"), None, None)
        .unwrap()
        .is_empty());
    assert!(!index.fields_for("eel").contains(&"nested".to_string()));
}

#[test]
fn test_returned_lists_are_independent() {
    let index = build(&[o1(), o2()]);
    let mut first = index.matches_for(&Value::from("text"), None, None).unwrap();
    first.clear();
    let second = index.matches_for(&Value::from("text"), None, None).unwrap();
    assert_eq!(second.len(), 3);
}

#[test]
fn test_concurrent_readers_share_index() {
    let index = Arc::new(build(&[o1(), o2(), o3()]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        index
                            .matches_for(&Value::from("useful"), None, None)
                            .unwrap()
                            .len()
                    })
                    .sum::<usize>()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 300);
    }
}
