//! Data loading and index construction.
//!
//! Each data file is a JSON array of objects. Every object is stamped with
//! `_type` for the object type it was loaded as, then indexed.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use zdsearch_core::{Record, Value, TYPE_FIELD};
use zdsearch_executor::ObjectType;
use zdsearch_index::{IndexBuilder, SearchIndex, Tokenizer};

use crate::config::DataConfig;

/// Read one JSON file of `object_type` records.
pub fn load_file(path: &Path, object_type: ObjectType) -> Result<Vec<Arc<Record>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read data file '{}'", path.display()))?;
    let parsed: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse data file '{}'", path.display()))?;

    let serde_json::Value::Array(items) = parsed else {
        bail!("data file '{}' must hold a JSON array", path.display());
    };

    let mut records = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        let serde_json::Value::Object(fields) = item else {
            bail!(
                "data file '{}': element {} is not an object",
                path.display(),
                position
            );
        };
        let mut record: Record = fields
            .into_iter()
            .map(|(field, value)| (field, Value::from(value)))
            .collect();
        record.insert(TYPE_FIELD, object_type.as_str());
        records.push(Arc::new(record));
    }

    tracing::debug!(
        target: "zdsearch::cli",
        path = %path.display(),
        object_type = %object_type,
        records = records.len(),
        "loaded data file"
    );
    Ok(records)
}

/// Read every configured file, in object-type order.
pub fn load_all(data: &DataConfig) -> Result<Vec<Arc<Record>>> {
    let mut records = Vec::new();
    for object_type in ObjectType::ALL {
        for path in data.paths(object_type) {
            records.extend(load_file(path, object_type)?);
        }
    }
    Ok(records)
}

/// Outcome of indexing a batch of records.
pub struct Indexed {
    /// Builder holding every record that indexed cleanly
    pub builder: IndexBuilder,
    /// Records skipped because a field could not be tokenized
    pub skipped: usize,
}

/// Index `records`, skipping (and logging) any that hold unsupported values.
pub fn index_records(tokenizer: Tokenizer, records: Vec<Arc<Record>>) -> Indexed {
    let mut builder = IndexBuilder::new(Arc::new(tokenizer));
    let mut skipped = 0;
    for record in records {
        if let Err(e) = builder.index(Arc::clone(&record)) {
            skipped += 1;
            let id = record.id().cloned().unwrap_or(Value::Null);
            tracing::warn!(
                target: "zdsearch::cli",
                object_type = record.record_type().unwrap_or("?"),
                id = %id,
                error = %e,
                "skipping record"
            );
        }
    }
    Indexed { builder, skipped }
}

/// Load, index and balance, reporting each phase through `progress`.
pub fn build_index<F>(
    data: &DataConfig,
    tokenizer: Tokenizer,
    mut progress: F,
) -> Result<(SearchIndex, Duration)>
where
    F: FnMut(&str),
{
    let started = Instant::now();

    progress("Loading data...");
    let records = load_all(data)?;

    progress("Indexing data...");
    let Indexed { builder, skipped } = index_records(tokenizer, records);
    if skipped > 0 {
        tracing::warn!(target: "zdsearch::cli", skipped, "some records were not indexed");
    }

    progress("Optimising index...");
    let index = builder.build();

    Ok((index, started.elapsed()))
}
