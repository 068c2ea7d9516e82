//! zdsearch: exact-match search shell over organization, ticket and user
//! JSON exports.
//!
//! Three modes:
//! - **One-shot mode**: `zdsearch [flags] COMMAND...` runs one command, exits
//! - **REPL mode**: `zdsearch [flags]` opens an interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "search user._id 1" | zdsearch` runs stdin line by line
//!
//! Data is loaded and indexed once at startup in every mode.

mod commands;
mod config;
mod format;
mod load;
mod parse;
mod repl;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use zdsearch_executor::{Executor, ObjectType};

use commands::build_cli;
use config::{CliConfig, DataConfig};
use format::OutputMode;
use repl::LineOutcome;

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("(error) {:#}", e);
            process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let matches = build_cli().get_matches();

    if matches.get_flag("print-config") {
        print!("{}", CliConfig::default_toml());
        return Ok(0);
    }

    init_logging(matches.get_one::<String>("log-level").map(String::as_str))?;

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let explicit = matches.get_one::<String>("config").map(Path::new);
    let mut config = CliConfig::discover(explicit, &cwd)?;

    for object_type in ObjectType::ALL {
        let flag = data_flag(object_type);
        if let Some(paths) = matches.get_many::<String>(flag) {
            config
                .data
                .set_paths(object_type, paths.map(PathBuf::from).collect());
        }
    }

    print_sources(&config.data);
    let tokenizer = config.tokenizer()?;
    let (index, elapsed) = load::build_index(&config.data, tokenizer, |phase| eprintln!("{}", phase))?;
    eprintln!("Done (in {} ms).", elapsed.as_millis());
    eprintln!();

    let executor = Executor::new(Arc::new(index));

    if let Some(words) = matches.get_many::<String>("command") {
        let words: Vec<String> = words.cloned().collect();
        return Ok(match repl::execute_words(&executor, &words, output_mode) {
            LineOutcome::Failed => 1,
            LineOutcome::Continue | LineOutcome::Quit => 0,
        });
    }

    if std::io::stdin().is_terminal() {
        println!("Now dropping to the search shell.");
        println!();
        repl::run_repl(&executor, output_mode)?;
        Ok(0)
    } else {
        Ok(repl::run_pipe(&executor, output_mode))
    }
}

/// Logs go to stderr. An explicit `--log-level` wins over `RUST_LOG`.
fn init_logging(level: Option<&str>) -> anyhow::Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter '{}'", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
    Ok(())
}

fn data_flag(object_type: ObjectType) -> &'static str {
    match object_type {
        ObjectType::Organization => "organization-data",
        ObjectType::Ticket => "ticket-data",
        ObjectType::User => "user-data",
    }
}

fn print_sources(data: &DataConfig) {
    for object_type in ObjectType::ALL {
        let paths: Vec<String> = data
            .paths(object_type)
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        eprintln!("Using {} data from {:?}", object_type, paths);
    }
    eprintln!();
}
