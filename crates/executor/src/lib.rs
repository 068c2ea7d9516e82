//! # zdsearch executor
//!
//! The query layer on top of [`zdsearch_index`]. It provides:
//! - [`Command`] - parsed `search` and `fields` commands
//! - [`Executor`] - runs commands against a built index
//! - [`Output`] - command results
//!
//! Search results are denormalized: each hit carries summaries of related
//! records under underscore-prefixed keys.
//!
//! | Type | Relation keys |
//! |------|---------------|
//! | organization | `_tickets`, `_users` |
//! | ticket | `_assignee`, `_submitter`, `_organization` |
//! | user | `_assigned_tickets`, `_submitted_tickets`, `_organization` |

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
mod output;
mod relations;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

pub use command::{coerce_term, Command, FieldsCommand, ObjectType, SearchCommand};
pub use error::{CommandParseError, Error, ParseErrorCode, Result};
pub use executor::Executor;
pub use output::Output;
pub use relations::{denormalize, Relation};

pub use zdsearch_core::{Record, Value};
