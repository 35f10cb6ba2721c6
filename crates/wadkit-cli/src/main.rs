//! Wadkit CLI - Command-line launcher and WAD/PK3 inspector for Doom source
//! ports.

mod cli;
mod commands;
mod error;
mod output;
mod progress;
mod settings;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Inspect(args) => commands::inspect::execute(args, &*formatter, cli.quiet),
        cli::Commands::Launch(args) => commands::launch::execute(args, &cli.config, &*formatter),
        cli::Commands::Config(args) => commands::config::execute(args, &cli.config, &*formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}

/// Diagnostics go to stderr so they never mix with command output.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else if quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
