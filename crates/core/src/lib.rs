//! Core types for zdsearch
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Unified value enum for record fields and search terms
//! - Record: A flat field-name to value mapping with reserved `_type`/`_id`
//! - OrderedTree: Unbalanced binary search tree with one-shot balancing
//! - Error: Error type shared by the index and executor layers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod tree;
pub mod value;

pub use error::{Error, Result};
pub use record::{Record, ID_FIELD, TYPE_FIELD};
pub use tree::{Inorder, OrderedTree};
pub use value::Value;
