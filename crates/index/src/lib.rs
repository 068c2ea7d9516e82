//! Search index for zdsearch
//!
//! This crate provides:
//! - Token: tagged token type (integer, float, boolean, string)
//! - Tokenizer: turns record field values and query terms into tokens
//! - IndexBuilder: bulk-loads records into per-type unbalanced trees
//! - SearchIndex: the frozen, balanced, read-only index
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use zdsearch_core::{Record, Value};
//! use zdsearch_index::IndexBuilder;
//!
//! let mut record = Record::new();
//! record.insert("_type", "organization");
//! record.insert("name", "Acme Corp");
//!
//! let mut builder = IndexBuilder::default();
//! builder.index(Arc::new(record)).unwrap();
//! let index = builder.build();
//!
//! let hits = index
//!     .records_for(&Value::from("ACME"), Some("name"), Some("organization"))
//!     .unwrap();
//! assert_eq!(hits.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod index;
pub mod token;
pub mod tokenizer;

pub use builder::IndexBuilder;
pub use index::{IndexStats, Match, SearchIndex, TreeStats};
pub use token::{FloatKey, Token, TokenKind};
pub use tokenizer::{Tokenizer, TokenizerConfig, DEFAULT_SEPARATOR_PATTERN};

pub use zdsearch_core::{Error, Result};
