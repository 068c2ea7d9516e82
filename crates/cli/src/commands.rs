//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the command-line interface.
pub fn build_cli() -> Command {
    Command::new("zdsearch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Exact-match search over organization, ticket and user JSON exports")
        .long_about(
            "zdsearch loads static JSON snapshots of organizations, tickets and users, \
             indexes them on startup, and answers exact-match queries from an interactive \
             shell. Lines piped on stdin are run as commands, one per line.",
        )
        .arg(
            Arg::new("organization-data")
                .long("organization-data")
                .value_name("PATH")
                .help("Organization JSON file (repeatable; replaces the configured list)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("ticket-data")
                .long("ticket-data")
                .value_name("PATH")
                .help("Ticket JSON file (repeatable; replaces the configured list)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("user-data")
                .long("user-data")
                .value_name("PATH")
                .help("User JSON file (repeatable; replaces the configured list)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Config file (default: ./zdsearch.toml if present)"),
        )
        .arg(
            Arg::new("print-config")
                .long("print-config")
                .help("Print the default config file and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .help("Log filter, e.g. warn or zdsearch=debug (default: $RUST_LOG, else warn)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .help("Run one command and exit, e.g. search user._id 1")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}
