//! The Executor - single entry point for queries.
//!
//! The Executor is a stateless dispatcher that routes commands to their
//! handlers and wraps the results in an [`Output`].

use std::sync::Arc;

use zdsearch_index::SearchIndex;

use crate::{Command, Output, Result};

/// The command executor.
///
/// Holds a shared handle to a built index and nothing else.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads; the index it
/// wraps is immutable.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use zdsearch_core::Record;
/// use zdsearch_executor::{Command, Executor, Output};
/// use zdsearch_index::IndexBuilder;
///
/// let mut org = Record::new();
/// org.insert("_type", "organization");
/// org.insert("_id", 101);
/// org.insert("name", "Acme");
///
/// let mut builder = IndexBuilder::default();
/// builder.index(Arc::new(org)).unwrap();
/// let executor = Executor::new(Arc::new(builder.build()));
///
/// let cmd = Command::parse(&["search", "organization.name", "acme"]).unwrap();
/// match executor.execute(cmd).unwrap() {
///     Output::Records(records) => assert_eq!(records.len(), 1),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    index: Arc<SearchIndex>,
}

impl Executor {
    /// Create a new executor over a built index.
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self { index }
    }

    /// The index this executor queries
    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        tracing::trace!(target: "zdsearch::executor", command = cmd.name(), "execute");
        match cmd {
            Command::Search(search) => {
                crate::handlers::search::search(&self.index, &search).map(Output::Records)
            }
            Command::Fields(fields) => Ok(Output::Fields(crate::handlers::fields::fields(
                &self.index,
                &fields,
            ))),
        }
    }

    /// Execute several commands in order.
    ///
    /// Each command gets its own result; a failure does not stop the batch.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Parse a split command line and execute it.
    pub fn execute_line<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Output> {
        let cmd = Command::parse(tokens)?;
        self.execute(cmd)
    }
}
