//! The frozen search index
//!
//! A `SearchIndex` holds one balanced tree per token kind, mapping each
//! token to the list of places it was found. It is produced exactly once by
//! [`IndexBuilder::build`](crate::IndexBuilder::build) and never mutated
//! afterwards, so it can be shared across reader threads without locking.
//!
//! # Lookup
//!
//! 1. Tokenize the term with the build-time tokenizer; keep the first token
//! 2. Pick the tree for the token's kind
//! 3. Look the token up (absent means an empty result, never an error)
//! 4. Filter by field and by record `_type`
//! 5. Return a fresh `Vec`; stored lists are never handed out

use crate::token::{FloatKey, Token, TokenKind};
use crate::tokenizer::Tokenizer;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use zdsearch_core::{OrderedTree, Record, Result, Value};

// ============================================================================
// Match
// ============================================================================

/// A place where a token was found: `record[field]`.
///
/// Equality is record identity plus field name, not record contents.
#[derive(Clone)]
pub struct Match {
    /// The record the token came from
    pub record: Arc<Record>,
    /// The field the token came from
    pub field: String,
}

impl Match {
    /// Create a new match
    pub fn new(record: Arc<Record>, field: impl Into<String>) -> Self {
        Match {
            record,
            field: field.into(),
        }
    }
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.record, &other.record) && self.field == other.field
    }
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("type", &self.record.record_type())
            .field("id", &self.record.id())
            .field("field", &self.field)
            .finish()
    }
}

// ============================================================================
// Per-kind trees
// ============================================================================

/// One tree per token kind.
#[derive(Default)]
pub(crate) struct TypedTrees {
    integers: OrderedTree<i64, Vec<Match>>,
    floats: OrderedTree<FloatKey, Vec<Match>>,
    booleans: OrderedTree<bool, Vec<Match>>,
    strings: OrderedTree<String, Vec<Match>>,
}

impl TypedTrees {
    /// Append matches to the list stored under `token`, creating it if needed.
    pub(crate) fn append(&mut self, token: Token, matches: Vec<Match>) {
        let stored = match token {
            Token::Integer(i) => self.integers.get_or_insert_with(i, Vec::new),
            Token::Float(f) => self.floats.get_or_insert_with(f, Vec::new),
            Token::Bool(b) => self.booleans.get_or_insert_with(b, Vec::new),
            Token::Str(s) => self.strings.get_or_insert_with(s, Vec::new),
        };
        stored.extend(matches);
    }

    fn lookup(&self, token: &Token) -> Option<&[Match]> {
        let stored = match token {
            Token::Integer(i) => self.integers.get(i),
            Token::Float(f) => self.floats.get(f),
            Token::Bool(b) => self.booleans.get(b),
            Token::Str(s) => self.strings.get(s),
        };
        stored.map(Vec::as_slice)
    }

    pub(crate) fn into_balanced(self) -> Self {
        TypedTrees {
            integers: self.integers.into_balanced(),
            floats: self.floats.into_balanced(),
            booleans: self.booleans.into_balanced(),
            strings: self.strings.into_balanced(),
        }
    }

    pub(crate) fn tree_stats(&self, kind: TokenKind) -> TreeStats {
        match kind {
            TokenKind::Integer => TreeStats::of(&self.integers),
            TokenKind::Float => TreeStats::of(&self.floats),
            TokenKind::Bool => TreeStats::of(&self.booleans),
            TokenKind::Str => TreeStats::of(&self.strings),
        }
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Shape of one per-kind tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Distinct tokens stored
    pub keys: usize,
    /// Tree height
    pub height: usize,
}

impl TreeStats {
    fn of<K, V>(tree: &OrderedTree<K, V>) -> Self {
        TreeStats {
            keys: tree.len(),
            height: tree.height(),
        }
    }
}

/// Summary of a built index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Records indexed
    pub records: usize,
    /// Integer tree
    pub integer: TreeStats,
    /// Float tree
    pub float: TreeStats,
    /// Boolean tree
    pub boolean: TreeStats,
    /// String tree
    pub string: TreeStats,
}

// ============================================================================
// SearchIndex
// ============================================================================

/// Immutable, balanced, queryable index.
pub struct SearchIndex {
    trees: TypedTrees,
    tokenizer: Arc<Tokenizer>,
    catalog: BTreeMap<String, BTreeSet<String>>,
    record_count: usize,
}

impl SearchIndex {
    pub(crate) fn new(
        trees: TypedTrees,
        tokenizer: Arc<Tokenizer>,
        catalog: BTreeMap<String, BTreeSet<String>>,
        record_count: usize,
    ) -> Self {
        SearchIndex {
            trees,
            tokenizer,
            catalog,
            record_count,
        }
    }

    /// Places where `term` was found.
    ///
    /// Only the first token of the term's tokenization is looked up. The
    /// term is tokenized as if it came from `restrict_field`, so literal
    /// fields are matched verbatim.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedValueType` if `term` cannot be tokenized.
    pub fn matches_for(
        &self,
        term: &Value,
        restrict_field: Option<&str>,
        restrict_type: Option<&str>,
    ) -> Result<Vec<Match>> {
        let tokens = self.tokenizer.tokenize(term, restrict_field)?;
        let Some(token) = tokens.into_iter().next() else {
            return Ok(Vec::new());
        };

        let Some(stored) = self.trees.lookup(&token) else {
            tracing::trace!(target: "zdsearch::index", %token, "token not indexed");
            return Ok(Vec::new());
        };

        let matches: Vec<Match> = stored
            .iter()
            .filter(|m| restrict_field.map_or(true, |field| m.field == field))
            .filter(|m| restrict_type.map_or(true, |ty| m.record.record_type() == Some(ty)))
            .cloned()
            .collect();

        tracing::trace!(
            target: "zdsearch::index",
            %token,
            stored = stored.len(),
            returned = matches.len(),
            "lookup"
        );
        Ok(matches)
    }

    /// Records where `term` was found, without field provenance.
    pub fn records_for(
        &self,
        term: &Value,
        restrict_field: Option<&str>,
        restrict_type: Option<&str>,
    ) -> Result<Vec<Arc<Record>>> {
        Ok(self
            .matches_for(term, restrict_field, restrict_type)?
            .into_iter()
            .map(|m| m.record)
            .collect())
    }

    /// Distinct field names seen on records of `object_type`, sorted.
    pub fn fields_for(&self, object_type: &str) -> Vec<String> {
        self.catalog
            .get(object_type)
            .map(|fields| fields.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Record types seen during indexing, sorted.
    pub fn object_types(&self) -> Vec<String> {
        self.catalog.keys().cloned().collect()
    }

    /// Number of records indexed
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// The tokenizer this index was built with
    pub fn tokenizer(&self) -> &Arc<Tokenizer> {
        &self.tokenizer
    }

    /// Sizes and heights of the per-kind trees
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.record_count,
            integer: self.trees.tree_stats(TokenKind::Integer),
            float: self.trees.tree_stats(TokenKind::Float),
            boolean: self.trees.tree_stats(TokenKind::Bool),
            string: self.trees.tree_stats(TokenKind::Str),
        }
    }
}

impl fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("stats", &self.stats())
            .field("object_types", &self.object_types())
            .finish()
    }
}
