//! Commands understood by the executor.
//!
//! A command line is split into words by the front end and handed to
//! [`Command::parse`]. Two commands exist:
//!
//! | Command | Syntax | Returns |
//! |---------|--------|---------|
//! | search | `search TYPE.FIELD TERM` | `Output::Records` |
//! | fields | `fields TYPE` | `Output::Fields` |
//!
//! Parsing never touches the index. A parsed command is plain data and can
//! be serialized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zdsearch_core::{Record, Value};
use zdsearch_index::SearchIndex;

use crate::error::{CommandParseError, ParseErrorCode};
use crate::Result;

// ============================================================================
// ObjectType
// ============================================================================

/// The kinds of record that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Organizations
    Organization,
    /// Tickets
    Ticket,
    /// Users
    User,
}

impl ObjectType {
    /// Every object type, in display order
    pub const ALL: [ObjectType; 3] = [ObjectType::Organization, ObjectType::Ticket, ObjectType::User];

    /// The `_type` value records of this kind carry
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Organization => "organization",
            ObjectType::Ticket => "ticket",
            ObjectType::User => "user",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = CommandParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ObjectType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseErrorCode::UnknownObjectType.into())
    }
}

// ============================================================================
// Search
// ============================================================================

/// `search TYPE.FIELD TERM`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCommand {
    /// Record kind to search
    pub object_type: ObjectType,
    /// Field the term must appear in
    pub field: String,
    /// Search term, after coercion
    pub term: Value,
}

impl SearchCommand {
    /// Parse `["search", "TYPE.FIELD", "TERM"]`.
    ///
    /// The first word is not inspected. The field is everything after the
    /// first `.`, so `ticket.via.channel` searches the field `via.channel`.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> std::result::Result<Self, CommandParseError> {
        let pair = tokens
            .get(1)
            .map(AsRef::as_ref)
            .filter(|pair| !pair.is_empty())
            .ok_or(ParseErrorCode::MissingObjectType)?;

        let (type_name, field) = pair
            .split_once('.')
            .ok_or(ParseErrorCode::MissingFieldName)?;
        if type_name.is_empty() {
            return Err(ParseErrorCode::MissingObjectType.into());
        }
        if field.is_empty() {
            return Err(ParseErrorCode::MissingFieldName.into());
        }
        let object_type: ObjectType = type_name.parse()?;

        let term = tokens
            .get(2)
            .map(AsRef::as_ref)
            .ok_or(ParseErrorCode::MissingSearchTerm)?;
        if tokens.len() > 3 {
            return Err(ParseErrorCode::ExtraArguments.into());
        }

        Ok(SearchCommand {
            object_type,
            field: field.to_string(),
            term: coerce_term(term),
        })
    }

    /// Run the search and attach related records to every hit.
    pub fn execute(&self, index: &SearchIndex) -> Result<Vec<Record>> {
        crate::handlers::search::search(index, self)
    }
}

/// Turn a raw search word into the value it most likely names.
///
/// - all ASCII digits: `Int` (a string when it overflows `i64`)
/// - digits, a dot, digits: `Float`
/// - `true` / `false` in any case: `Bool`
/// - anything else: `String`, unchanged
pub fn coerce_term(raw: &str) -> Value {
    fn all_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    if all_digits(raw) {
        return match raw.parse::<i64>() {
            Ok(i) => Value::Int(i),
            Err(_) => Value::String(raw.to_string()),
        };
    }
    if let Some((whole, frac)) = raw.split_once('.') {
        if all_digits(whole) && all_digits(frac) {
            if let Ok(f) = raw.parse::<f64>() {
                return Value::Float(f);
            }
        }
    }
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(raw.to_string())
}

// ============================================================================
// Fields
// ============================================================================

/// `fields TYPE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsCommand {
    /// Record kind to describe
    pub object_type: ObjectType,
}

impl FieldsCommand {
    /// Parse `["fields", "TYPE"]`.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> std::result::Result<Self, CommandParseError> {
        let type_name = tokens
            .get(1)
            .map(AsRef::as_ref)
            .filter(|t| !t.is_empty())
            .ok_or(ParseErrorCode::MissingObjectType)?;
        let object_type: ObjectType = type_name.parse()?;
        if tokens.len() > 2 {
            return Err(ParseErrorCode::ExtraArguments.into());
        }
        Ok(FieldsCommand { object_type })
    }

    /// Sorted field names seen on records of this type.
    pub fn execute(&self, index: &SearchIndex) -> Vec<String> {
        crate::handlers::fields::fields(index, self)
    }
}

// ============================================================================
// Command
// ============================================================================

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Exact-match search with related records.
    /// Returns: `Output::Records`
    Search(SearchCommand),

    /// List searchable fields.
    /// Returns: `Output::Fields`
    Fields(FieldsCommand),
}

impl Command {
    /// Command words, for completion and help
    pub const NAMES: [&'static str; 2] = ["search", "fields"];

    /// Parse a split command line, dispatching on its first word.
    ///
    /// # Example
    ///
    /// ```
    /// use zdsearch_core::Value;
    /// use zdsearch_executor::{Command, ObjectType};
    ///
    /// let cmd = Command::parse(&["search", "user.active", "TRUE"]).unwrap();
    /// match cmd {
    ///     Command::Search(search) => {
    ///         assert_eq!(search.object_type, ObjectType::User);
    ///         assert_eq!(search.field, "active");
    ///         assert_eq!(search.term, Value::Bool(true));
    ///     }
    ///     Command::Fields(_) => unreachable!(),
    /// }
    /// ```
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> std::result::Result<Self, CommandParseError> {
        let word = tokens
            .first()
            .map(AsRef::as_ref)
            .ok_or(ParseErrorCode::EmptyCommand)?;
        match word {
            "search" => SearchCommand::parse(tokens).map(Command::Search),
            "fields" => FieldsCommand::parse(tokens).map(Command::Fields),
            _ => Err(ParseErrorCode::UnknownCommand.into()),
        }
    }

    /// Command word for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Search(_) => "search",
            Command::Fields(_) => "fields",
        }
    }
}

impl From<SearchCommand> for Command {
    fn from(cmd: SearchCommand) -> Self {
        Command::Search(cmd)
    }
}

impl From<FieldsCommand> for Command {
    fn from(cmd: FieldsCommand) -> Self {
        Command::Fields(cmd)
    }
}
