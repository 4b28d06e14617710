//! arrayfns CLI - run array operations over a list of integers.

use arrayfns_cli::cli::Cli;
use arrayfns_cli::commands;
use arrayfns_cli::common::error::report_and_exit;
use clap::Parser;

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match commands::run(cli.command) {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{output}"),
        Err(e) => report_and_exit(e),
    }
}
