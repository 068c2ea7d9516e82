//! Command handlers, one module per command.
//!
//! | Module | Command | Output |
//! |--------|---------|--------|
//! | `search` | `search TYPE.FIELD TERM` | denormalized records |
//! | `fields` | `fields TYPE` | sorted field names |

pub mod fields;
pub mod search;
