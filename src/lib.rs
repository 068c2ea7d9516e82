//! zdsearch - in-memory exact-match search over organization, ticket and
//! user records
//!
//! Records are loaded once, tokenized, and indexed into one balanced tree
//! per token kind. Queries name an object type, a field and a term; hits
//! come back with related records folded in.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use zdsearch::{Command, Executor, IndexBuilder, Output, Record};
//!
//! let mut user = Record::new();
//! user.insert("_type", "user");
//! user.insert("_id", 1);
//! user.insert("name", "Bob Smith");
//!
//! let mut builder = IndexBuilder::default();
//! builder.index(Arc::new(user)).unwrap();
//! let executor = Executor::new(Arc::new(builder.build()));
//!
//! let output = executor.execute(Command::parse(&["search", "user.name", "bob"]).unwrap()).unwrap();
//! assert_eq!(output.len(), 1);
//! ```
//!
//! # Architecture
//!
//! All queries go through the [`Executor`], which parses command words and
//! denormalizes hits. The index and tree layers are re-exported for callers
//! that build or inspect an index directly.

// Re-export the public API from zdsearch-executor
pub use zdsearch_executor::*;

pub use zdsearch_core::{OrderedTree, ID_FIELD, TYPE_FIELD};
pub use zdsearch_index::{
    IndexBuilder, IndexStats, Match, SearchIndex, Token, TokenKind, Tokenizer, TokenizerConfig,
};
