//! Tokenizer for indexing and querying
//!
//! Rules, by value type:
//! - Int, Float, Bool: a single token of the same kind
//! - String: split on the separator pattern, drop empty fragments, lowercase.
//!   A string with no words yields the empty-string token so blank fields
//!   can be searched for.
//! - Array of scalars: each element tokenized in order, with the same
//!   empty-string rule for the concatenation
//! - anything else: `Error::UnsupportedValueType`
//!
//! Literal fields (identifiers, URLs, emails) bypass splitting and
//! lowercasing: their strings tokenize to themselves.

use crate::token::Token;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use zdsearch_core::{Error, Result, Value};

/// Default separator: any run of characters that is not a letter, digit or
/// apostrophe, so contractions like "shouldn't" survive as one word.
pub const DEFAULT_SEPARATOR_PATTERN: &str = r"[^\p{L}\p{N}']+";

/// Tokenizer configuration, loadable from the `[tokenizer]` table of the
/// config file.
///
/// ```toml
/// [tokenizer]
/// separator_pattern = "[^\\p{L}\\p{N}']+"
/// literal_fields = ["_id", "url", "email"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Regex matching the separators between words
    pub separator_pattern: String,
    /// Fields whose string values are indexed verbatim
    pub literal_fields: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            separator_pattern: DEFAULT_SEPARATOR_PATTERN.to_string(),
            literal_fields: Vec::new(),
        }
    }
}

/// Turns values into index tokens.
///
/// The same tokenizer must be used to build an index and to query it; the
/// [`SearchIndex`](crate::SearchIndex) keeps a handle to the one it was
/// built with.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    separator: Regex,
    literal_fields: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer {
            separator: Regex::new(DEFAULT_SEPARATOR_PATTERN)
                .expect("default separator pattern is valid"),
            literal_fields: HashSet::new(),
        }
    }
}

impl Tokenizer {
    /// Build a tokenizer from configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the separator pattern is not a valid
    /// regex or matches the empty string.
    pub fn new(config: &TokenizerConfig) -> Result<Self> {
        let separator = Regex::new(&config.separator_pattern).map_err(|e| {
            Error::InvalidConfig(format!(
                "separator_pattern '{}': {}",
                config.separator_pattern, e
            ))
        })?;
        if separator.is_match("") {
            return Err(Error::InvalidConfig(format!(
                "separator_pattern '{}' matches the empty string",
                config.separator_pattern
            )));
        }
        Ok(Tokenizer {
            separator,
            literal_fields: config.literal_fields.iter().cloned().collect(),
        })
    }

    /// Add literal fields to this tokenizer
    pub fn with_literal_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literal_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Whether string values of `field` bypass splitting
    pub fn is_literal(&self, field: &str) -> bool {
        self.literal_fields.contains(field)
    }

    /// Tokenize a value found in `field` (or a query term restricted to it).
    ///
    /// # Example
    ///
    /// ```
    /// use zdsearch_core::Value;
    /// use zdsearch_index::{Token, Tokenizer};
    ///
    /// let tokens = Tokenizer::default()
    ///     .tokenize(&Value::from("Don't PANIC!"), None)
    ///     .unwrap();
    /// assert_eq!(tokens, vec![Token::str("don't"), Token::str("panic")]);
    /// ```
    pub fn tokenize(&self, value: &Value, field: Option<&str>) -> Result<Vec<Token>> {
        let literal = field.map_or(false, |f| self.is_literal(f));
        let mut tokens = Vec::new();
        match value {
            Value::Array(elements) => {
                for element in elements {
                    self.tokenize_scalar(element, literal, &mut tokens)?;
                }
            }
            other => self.tokenize_scalar(other, literal, &mut tokens)?,
        }
        if tokens.is_empty() {
            tokens.push(Token::Str(String::new()));
        }
        Ok(tokens)
    }

    fn tokenize_scalar(&self, value: &Value, literal: bool, out: &mut Vec<Token>) -> Result<()> {
        match value {
            Value::Int(i) => out.push(Token::Integer(*i)),
            Value::Float(f) => out.push(Token::Float((*f).into())),
            Value::Bool(b) => out.push(Token::Bool(*b)),
            Value::String(s) if literal => out.push(Token::Str(s.clone())),
            Value::String(s) => {
                let before = out.len();
                out.extend(
                    self.separator
                        .split(s)
                        .filter(|word| !word.is_empty())
                        .map(|word| Token::Str(word.to_lowercase())),
                );
                if out.len() == before {
                    out.push(Token::Str(String::new()));
                }
            }
            Value::Null | Value::Array(_) | Value::Object(_) => {
                return Err(Error::unsupported(value));
            }
        }
        Ok(())
    }
}
