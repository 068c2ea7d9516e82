//! Malformed command lines are rejected before the index is touched.

use crate::common::*;
use zdsearch::ParseErrorCode;

fn code(words: &[&str]) -> Option<ParseErrorCode> {
    run(&create_executor(), words).unwrap_err().parse_code()
}

#[test]
fn malformed_searches() {
    assert_eq!(code(&["search"]), Some(ParseErrorCode::MissingObjectType));
    assert_eq!(code(&["search", "user"]), Some(ParseErrorCode::MissingFieldName));
    assert_eq!(code(&["search", "user."]), Some(ParseErrorCode::MissingFieldName));
    assert_eq!(code(&["search", ".name", "x"]), Some(ParseErrorCode::MissingObjectType));
    assert_eq!(code(&["search", "group.name", "x"]), Some(ParseErrorCode::UnknownObjectType));
    assert_eq!(code(&["search", "user.name"]), Some(ParseErrorCode::MissingSearchTerm));
    assert_eq!(
        code(&["search", "user.name", "x", "y"]),
        Some(ParseErrorCode::ExtraArguments)
    );
}

#[test]
fn malformed_fields_and_unknown_commands() {
    assert_eq!(code(&["fields"]), Some(ParseErrorCode::MissingObjectType));
    assert_eq!(code(&["fields", "group"]), Some(ParseErrorCode::UnknownObjectType));
    assert_eq!(code(&["lookup", "user"]), Some(ParseErrorCode::UnknownCommand));
    assert_eq!(code(&[]), Some(ParseErrorCode::EmptyCommand));
}

#[test]
fn error_messages_name_the_problem() {
    let err = run(&create_executor(), &["search", "user.name"]).unwrap_err();
    assert_eq!(err.to_string(), "malformed command: missing search term");
}
