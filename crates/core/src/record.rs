//! Records: flat mappings of field names to values
//!
//! A record carries two reserved fields:
//! - `_type`: which record kind it is (organization, ticket, user, ...)
//! - `_id`: the join key used by related records
//!
//! The index holds records behind `Arc`, so a record is shared, never copied.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved field naming the record kind.
pub const TYPE_FIELD: &str = "_type";
/// Reserved field holding the record's join key.
pub const ID_FIELD: &str = "_id";

/// A flat record of field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set a field, returning the previous value if any
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Iterate over `(field, value)` pairs in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over field names in order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The record kind from `_type`, if it is a string
    pub fn record_type(&self) -> Option<&str> {
        self.get(TYPE_FIELD).and_then(Value::as_str)
    }

    /// The join key from `_id`
    pub fn id(&self) -> Option<&Value> {
        self.get(ID_FIELD)
    }

    /// Copy of this record restricted to `fields` (absent fields are skipped)
    pub fn project(&self, fields: &[&str]) -> Record {
        fields
            .iter()
            .filter_map(|f| self.fields.get(*f).map(|v| (f.to_string(), v.clone())))
            .collect()
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Record { fields }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.fields)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
