//! Error types for command parsing and execution.
//!
//! Parse failures carry a [`ParseErrorCode`] so a front end can choose its
//! own message; execution failures wrap the index error unchanged.

use serde::{Deserialize, Serialize};

/// Why a command line was rejected.
///
/// Raised before the index is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorCode {
    /// No `type.field` argument, or an empty type part
    MissingObjectType,
    /// No `.` in the `type.field` argument, or an empty field part
    MissingFieldName,
    /// Type is not organization, ticket or user
    UnknownObjectType,
    /// No search term
    MissingSearchTerm,
    /// Too many arguments
    ExtraArguments,
    /// First word is not a known command
    UnknownCommand,
    /// Nothing to parse
    EmptyCommand,
}

impl ParseErrorCode {
    /// Human-readable description
    pub fn message(self) -> &'static str {
        match self {
            ParseErrorCode::MissingObjectType => "missing object type",
            ParseErrorCode::MissingFieldName => "missing field name (expected TYPE.FIELD)",
            ParseErrorCode::UnknownObjectType => {
                "unknown object type (expected organization, ticket or user)"
            }
            ParseErrorCode::MissingSearchTerm => "missing search term",
            ParseErrorCode::ExtraArguments => "too many arguments",
            ParseErrorCode::UnknownCommand => "unknown command",
            ParseErrorCode::EmptyCommand => "empty command",
        }
    }
}

/// A malformed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("malformed command: {}", .code.message())]
pub struct CommandParseError {
    /// What was wrong
    pub code: ParseErrorCode,
}

impl CommandParseError {
    /// Create an error with the given code
    pub fn new(code: ParseErrorCode) -> Self {
        CommandParseError { code }
    }
}

impl From<ParseErrorCode> for CommandParseError {
    fn from(code: ParseErrorCode) -> Self {
        CommandParseError::new(code)
    }
}

/// Command execution errors.
///
/// # Example
///
/// ```
/// use zdsearch_executor::{Command, Error, ParseErrorCode};
///
/// match Command::parse(&["search", "user"]) {
///     Err(e) => assert_eq!(e.code, ParseErrorCode::MissingFieldName),
///     Ok(_) => unreachable!(),
/// }
///
/// let err: Error = Command::parse(&["frobnicate"]).unwrap_err().into();
/// assert_eq!(err.parse_code(), Some(ParseErrorCode::UnknownCommand));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The command line could not be parsed
    #[error(transparent)]
    Parse(#[from] CommandParseError),

    /// The index rejected a term
    #[error(transparent)]
    Index(#[from] zdsearch_core::Error),
}

impl Error {
    /// The parse error code, if this is a parse error
    pub fn parse_code(&self) -> Option<ParseErrorCode> {
        match self {
            Error::Parse(e) => Some(e.code),
            Error::Index(_) => None,
        }
    }
}

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
