//! Index builder: bulk-load, then freeze
//!
//! The builder inserts into plain unbalanced trees while records stream in,
//! then [`IndexBuilder::build`] rebuilds every tree at minimum height and
//! hands back an immutable [`SearchIndex`]. `build` consumes the builder, so
//! nothing can be indexed after the freeze.

use crate::index::{Match, SearchIndex, TypedTrees};
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use zdsearch_core::{Record, Result};

/// Accumulates token → match lists for a set of records.
pub struct IndexBuilder {
    trees: TypedTrees,
    tokenizer: Arc<Tokenizer>,
    catalog: BTreeMap<String, BTreeSet<String>>,
    records_indexed: usize,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(Arc::new(Tokenizer::default()))
    }
}

impl IndexBuilder {
    /// Create a builder that tokenizes with `tokenizer`
    pub fn new(tokenizer: Arc<Tokenizer>) -> Self {
        IndexBuilder {
            trees: TypedTrees::default(),
            tokenizer,
            catalog: BTreeMap::new(),
            records_indexed: 0,
        }
    }

    /// Index every field of `record`.
    ///
    /// All fields are tokenized before anything is stored, so a record that
    /// fails to tokenize leaves the trees untouched. Every token occurrence
    /// records a match, so a word repeated within a field matches twice.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedValueType` for fields holding nulls, nested
    /// records or nested arrays.
    pub fn index(&mut self, record: Arc<Record>) -> Result<()> {
        let mut grouped: Vec<(Token, Vec<Match>)> = Vec::new();
        let mut slots: HashMap<Token, usize> = HashMap::new();

        for (field, value) in record.iter() {
            for token in self.tokenizer.tokenize(value, Some(field))? {
                let slot = match slots.get(&token) {
                    Some(slot) => *slot,
                    None => {
                        slots.insert(token.clone(), grouped.len());
                        grouped.push((token, Vec::new()));
                        grouped.len() - 1
                    }
                };
                grouped[slot].1.push(Match::new(Arc::clone(&record), field));
            }
        }

        for (token, matches) in grouped {
            self.trees.append(token, matches);
        }

        if let Some(record_type) = record.record_type() {
            self.catalog
                .entry(record_type.to_string())
                .or_default()
                .extend(record.field_names().map(str::to_string));
        }
        self.records_indexed += 1;
        Ok(())
    }

    /// Index a sequence of records, stopping at the first failure.
    ///
    /// Returns how many records were indexed.
    pub fn index_all<I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = Arc<Record>>,
    {
        let mut count = 0;
        for record in records {
            self.index(record)?;
            count += 1;
        }
        Ok(count)
    }

    /// Records indexed so far
    pub fn records_indexed(&self) -> usize {
        self.records_indexed
    }

    /// Balance every tree and freeze the result.
    pub fn build(self) -> SearchIndex {
        let IndexBuilder {
            trees,
            tokenizer,
            catalog,
            records_indexed,
        } = self;

        let trees = trees.into_balanced();
        let index = SearchIndex::new(trees, tokenizer, catalog, records_indexed);
        let stats = index.stats();

        tracing::debug!(
            target: "zdsearch::index",
            integer_keys = stats.integer.keys,
            integer_height = stats.integer.height,
            float_keys = stats.float.keys,
            float_height = stats.float.height,
            boolean_keys = stats.boolean.keys,
            boolean_height = stats.boolean.height,
            string_keys = stats.string.keys,
            string_height = stats.string.height,
            "balanced index trees"
        );
        tracing::info!(
            target: "zdsearch::index",
            records = stats.records,
            object_types = index.object_types().len(),
            "search index built"
        );
        index
    }
}
