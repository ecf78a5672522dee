//! Command-line interface for audius-client.
//!
//! Every subcommand calls one client operation and prints the result as
//! pretty JSON on stdout. Logs go to stderr.

mod commands;

pub use commands::{Cli, Commands, run_command};
