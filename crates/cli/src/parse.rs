//! Line → meta-command or command words.
//!
//! Meta-commands (`help`, `exit`, `quit`, `clear`) are handled by the shell
//! itself; everything else is split with shell quoting rules and handed to
//! the executor.

/// Shell-level commands that never reach the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
    Clear,
}

/// Check for a meta-command before splitting the line.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line.split_whitespace().next()? {
        "help" => Some(MetaCommand::Help),
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        _ => None,
    }
}

/// Split a line into words, honouring quotes.
///
/// `search user.name ""` yields an empty third word, which searches for
/// empty fields. Returns an error for unbalanced quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    shlex::split(line).ok_or_else(|| format!("Invalid quoting: {}", line))
}
