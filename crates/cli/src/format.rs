//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): a field/value table per record, fields in columns
//! - **JSON** (`--json`): `serde_json::to_string_pretty` of the output

use zdsearch_core::Record;
use zdsearch_executor::{Error, Output, ParseErrorCode};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

const RULE: &str = "-----------------------------";

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error. `command` is the word the user typed first.
pub fn format_error(err: &Error, command: Option<&str>, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string(),
            "code": err.parse_code(),
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => match err.parse_code() {
            Some(ParseErrorCode::UnknownCommand) => format!(
                "Unknown command {}. Try `help` for help.",
                command.unwrap_or_default()
            ),
            Some(code) => format!(
                "Malformed command: {} (try `help` for usage instructions)",
                code.message()
            ),
            None => format!("(error) {}", err),
        },
    }
}

// =========================================================================
// JSON mode
// =========================================================================

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// =========================================================================
// Human mode
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Records(records) => format_records(records),
        Output::Fields(fields) => format_columns(fields),
    }
}

fn format_records(records: &[Record]) -> String {
    let mut lines = vec![format!("{:<20} {}", "Field name", "Value"), RULE.to_string()];
    for record in records {
        for (field, value) in record.iter() {
            lines.push(format!("{:<20} {}", field, value));
        }
        lines.push(RULE.to_string());
    }
    lines.push(format!("(found {} result(s))", records.len()));
    lines.join("\n")
}

/// Field names three to a row.
fn format_columns(fields: &[String]) -> String {
    fields
        .chunks(3)
        .map(|row| {
            let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
            format!("{:<40} {:<20} {}", cell(0), cell(1), cell(2))
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
