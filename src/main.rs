//! jarinstaller - install runnable jars as commands
//!
//! Copies a jar into `~/.jars/archives`, writes a launcher into `~/.jars/bin`
//! and puts that directory on the user's PATH.

use clap::{CommandFactory, Parser};
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod archive;
mod cli;
mod commands;
mod config;
mod error;
mod launcher;
mod operations;
mod profile;
mod store;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::Result;

/// Send diagnostics to stderr. `JARINSTALLER_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(config::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(cli: Cli) -> Result<()> {
    if cli.install_self {
        return commands::install::run_self(cli.root, cli.self_path);
    }

    match cli.command {
        Some(Commands::Install(args)) => commands::install::run(cli.root, args),
        Some(Commands::Uninstall(args)) => commands::uninstall::run(cli.root, args),
        Some(Commands::List(args)) => commands::list::run(cli.root, args),
        Some(Commands::Status(args)) => commands::status::run(cli.root, args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("Hint: {help}");
        }
        std::process::exit(1);
    }
}
