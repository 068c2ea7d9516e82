//! Integration Tests
//!
//! End-to-end runs through the public facade: JSON records in, command
//! words through the executor, denormalized records out.
//! - search: hits, relations, term coercion, literal fields
//! - fields: per-type catalogs
//! - errors: malformed command lines

mod common;

mod errors;
mod fields;
mod search;
