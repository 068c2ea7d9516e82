//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant.

use serde::{Deserialize, Serialize};
use zdsearch_core::Record;

/// Successful command execution results.
///
/// # Example
///
/// ```text
/// match executor.execute(cmd)? {
///     Output::Records(records) => println!("{} result(s)", records.len()),
///     Output::Fields(fields) => println!("{}", fields.join(", ")),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    /// Search hits, each with its related-record summaries
    Records(Vec<Record>),

    /// Field names, sorted
    Fields(Vec<String>),
}

impl Output {
    /// Number of rows in this output
    pub fn len(&self) -> usize {
        match self {
            Output::Records(records) => records.len(),
            Output::Fields(fields) => fields.len(),
        }
    }

    /// Whether this output has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
