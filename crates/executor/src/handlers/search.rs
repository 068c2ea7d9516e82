//! Search command handler.
//!
//! Looks the term up in the requested field of the requested type, then
//! denormalizes every hit through the type's relations.

use zdsearch_core::Record;
use zdsearch_index::SearchIndex;

use crate::command::SearchCommand;
use crate::relations::denormalize;
use crate::Result;

/// Handle `search TYPE.FIELD TERM`
pub fn search(index: &SearchIndex, cmd: &SearchCommand) -> Result<Vec<Record>> {
    let hits = index.records_for(
        &cmd.term,
        Some(&cmd.field),
        Some(cmd.object_type.as_str()),
    )?;

    let results = hits
        .iter()
        .map(|hit| denormalize(hit, cmd.object_type, index))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        target: "zdsearch::executor",
        object_type = %cmd.object_type,
        field = %cmd.field,
        term = %cmd.term,
        hits = results.len(),
        "search complete"
    );
    Ok(results)
}
