//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};
use std::sync::Arc;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use zdsearch_executor::{Command, Executor, ObjectType};
use zdsearch_index::SearchIndex;

use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, split_line, MetaCommand};

const PROMPT: &str = "zdsearch> ";

/// Usage shown at startup and by `help`.
pub const INTERACTIVE_HELP: &str = "\
To discover what fields are available to query
    > fields {organization|ticket|user}
To query on a particular object type/field pair
    > search {organization|ticket|user}.FIELD SEARCH_TERM
    (quote the term to search for a value with spaces, \"\" for empty fields)
To exit
    > exit
    or
    > ^D
To see this help again
    > help";

/// What a line asked the shell to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading
    Continue,
    /// The line failed; keep reading
    Failed,
    /// Stop reading
    Quit,
}

/// Run the interactive REPL.
pub fn run_repl(executor: &Executor, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let helper = SearchHelper::new(Arc::clone(executor.index()));
    let mut rl: Editor<SearchHelper, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    println!("{}", INTERACTIVE_HELP);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if run_line(executor, trimmed, mode) == LineOutcome::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C drops the line, not the shell
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
    Ok(())
}

/// Run in pipe mode: read lines from stdin, execute each.
///
/// Returns the process exit code: 1 if any line failed.
pub fn run_pipe(executor: &Executor, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match run_line(executor, trimmed, mode) {
            LineOutcome::Continue => {}
            LineOutcome::Failed => exit_code = 1,
            LineOutcome::Quit => break,
        }
    }

    exit_code
}

/// Execute one line: a meta-command or an executor command.
pub fn run_line(executor: &Executor, line: &str, mode: OutputMode) -> LineOutcome {
    if let Some(meta) = check_meta_command(line) {
        match meta {
            MetaCommand::Quit => return LineOutcome::Quit,
            MetaCommand::Help => println!("{}", INTERACTIVE_HELP),
            MetaCommand::Clear => print!("\x1B[2J\x1B[1;1H"),
        }
        return LineOutcome::Continue;
    }

    let tokens = match split_line(line) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("(error) {}", e);
            return LineOutcome::Failed;
        }
    };
    if tokens.is_empty() {
        return LineOutcome::Continue;
    }

    execute_words(executor, &tokens, mode)
}

/// Execute an already-split command. Used by pipe, REPL and one-shot mode.
pub fn execute_words(executor: &Executor, tokens: &[String], mode: OutputMode) -> LineOutcome {
    match executor.execute_line(tokens) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            LineOutcome::Continue
        }
        Err(e) => {
            tracing::debug!(target: "zdsearch::cli", error = %e, "command failed");
            let first = tokens.first().map(String::as_str);
            println!("{}", format_error(&e, first, mode));
            LineOutcome::Failed
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.zdsearch_history", h))
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Meta-commands offered alongside the executor's command words.
const META_COMMANDS: &[&str] = &["help", "exit", "quit", "clear"];

struct SearchHelper {
    index: Arc<SearchIndex>,
}

impl SearchHelper {
    fn new(index: Arc<SearchIndex>) -> Self {
        Self { index }
    }

    /// Candidates for the word being typed, given the words before it.
    fn candidates(&self, previous: &[&str], prefix: &str) -> Vec<String> {
        match previous {
            [] => Command::NAMES
                .iter()
                .chain(META_COMMANDS)
                .map(|s| s.to_string())
                .collect(),
            ["fields"] => ObjectType::ALL.iter().map(|t| t.to_string()).collect(),
            ["search"] => match prefix.split_once('.') {
                Some((type_name, _)) => match type_name.parse::<ObjectType>() {
                    Ok(t) => self
                        .index
                        .fields_for(t.as_str())
                        .into_iter()
                        .map(|field| format!("{}.{}", t, field))
                        .collect(),
                    Err(_) => Vec::new(),
                },
                None => ObjectType::ALL.iter().map(|t| format!("{}.", t)).collect(),
            },
            _ => Vec::new(),
        }
    }
}

impl Helper for SearchHelper {}
impl Validator for SearchHelper {}
impl Highlighter for SearchHelper {}
impl Hinter for SearchHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for SearchHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        let mut parts: Vec<&str> = line_to_pos.split_whitespace().collect();

        // A trailing space means a new, empty word is being started
        let prefix = if line_to_pos.ends_with(char::is_whitespace) || parts.is_empty() {
            ""
        } else {
            parts.pop().unwrap_or("")
        };

        let candidates = self
            .candidates(&parts, prefix)
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();
        Ok((pos - prefix.len(), candidates))
    }
}
