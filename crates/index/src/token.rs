//! Index tokens
//!
//! A token is the atomic unit of indexed and queried data. Tokens are tagged
//! by kind, and each kind is stored in its own tree, so `Bool(false)` and
//! `Integer(0)` can never meet.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An `f64` with a total order, usable as a tree key.
///
/// Ordering follows `f64::total_cmp`. Negative zero is folded into positive
/// zero on construction so `-0.0` and `0.0` are the same key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloatKey(f64);

impl FloatKey {
    /// Wrap a float
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            FloatKey(0.0)
        } else {
            FloatKey(value)
        }
    }

    /// The wrapped float
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for FloatKey {
    fn from(value: f64) -> Self {
        FloatKey::new(value)
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatKey {}

impl PartialOrd for FloatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// Which tree a token lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// `Token::Integer`
    Integer,
    /// `Token::Float`
    Float,
    /// `Token::Bool`
    Bool,
    /// `Token::Str`
    Str,
}

impl TokenKind {
    /// Short name for logs and stats
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Bool => "boolean",
            TokenKind::Str => "string",
        }
    }
}

/// An indexed or queried token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Integer field value
    Integer(i64),
    /// Float field value
    Float(FloatKey),
    /// Boolean field value
    Bool(bool),
    /// Normalized string fragment (or a literal field's full string)
    Str(String),
}

impl Token {
    /// The token's kind
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Integer(_) => TokenKind::Integer,
            Token::Float(_) => TokenKind::Float,
            Token::Bool(_) => TokenKind::Bool,
            Token::Str(_) => TokenKind::Str,
        }
    }

    /// Convenience constructor for string tokens
    pub fn str(s: impl Into<String>) -> Self {
        Token::Str(s.into())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(i) => write!(f, "{}", i),
            Token::Float(x) => write!(f, "{}", x.get()),
            Token::Bool(b) => write!(f, "{}", b),
            Token::Str(s) => write!(f, "{:?}", s),
        }
    }
}
