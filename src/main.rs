//! `audius` - command-line front end for the Audius API client.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use audius_client::cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("audius_client=info".parse()?))
        .init();

    cli::run_command(&args)
}
