//! CLI definitions using clap derive API
//!
//! Argument types for each subcommand live in their own submodule:
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - list: List command arguments
//! - status: Status command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ROOT_ENV, SELF_ENV};

pub mod completions;
pub mod install;
pub mod list;
pub mod status;
pub mod uninstall;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use status::StatusArgs;
pub use uninstall::UninstallArgs;

/// jarinstaller - put runnable jars on your PATH
///
/// Copies a jar into a private store and writes a launcher script next to it.
#[derive(Parser, Debug)]
#[command(
    name = "jarinstaller",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install runnable jars as commands",
    long_about = "jarinstaller copies runnable jars into ~/.jars/archives, writes a launcher \
                  for each into ~/.jars/bin and makes sure that directory is on your PATH.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  jarinstaller install build/libs/tool-1.2.0.jar  \x1b[90m# Install as `tool`\x1b[0m\n   \
                  jarinstaller uninstall tool                     \x1b[90m# Remove launcher and jar\x1b[0m\n   \
                  jarinstaller list                               \x1b[90m# List installed jars\x1b[0m\n   \
                  jarinstaller --install-self                     \x1b[90m# Install jarinstaller itself\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Install the running jarinstaller archive
    #[arg(long)]
    pub install_self: bool,

    /// Install root holding archives/ and bin/ (defaults to ~/.jars)
    #[arg(long, global = true, env = ROOT_ENV, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Archive used by --install-self (defaults to the running executable)
    #[arg(long, env = SELF_ENV, value_name = "FILE")]
    pub self_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a runnable jar
    Install(InstallArgs),

    /// Remove an installed jar and its launcher
    Uninstall(UninstallArgs),

    /// List installed jars
    List(ListArgs),

    /// Check whether a jar is installed
    Status(StatusArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from(["jarinstaller", "install", "build/libs/test-1.0.0.jar"])
            .unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.path, PathBuf::from("build/libs/test-1.0.0.jar"));
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_requires_path() {
        assert!(Cli::try_parse_from(["jarinstaller", "install"]).is_err());
    }

    #[test]
    fn test_cli_parsing_uninstall() {
        let cli = Cli::try_parse_from(["jarinstaller", "uninstall", "test"]).unwrap();
        match cli.command {
            Some(Commands::Uninstall(args)) => assert_eq!(args.target, "test"),
            _ => panic!("Expected Uninstall command"),
        }
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["jarinstaller", "list"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => assert!(!args.detailed),
            _ => panic!("Expected List command"),
        }

        let cli = Cli::try_parse_from(["jarinstaller", "list", "--detailed"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(ListArgs { detailed: true }))));
    }

    #[test]
    fn test_cli_parsing_status() {
        let cli = Cli::try_parse_from(["jarinstaller", "status", "tool-1.0.jar"]).unwrap();
        match cli.command {
            Some(Commands::Status(args)) => assert_eq!(args.path, PathBuf::from("tool-1.0.jar")),
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["jarinstaller", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Version)));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["jarinstaller", "completions", "--shell", "bash"]).unwrap();
        match cli.command {
            Some(Commands::Completions(args)) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from(["jarinstaller"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.install_self);
    }

    #[test]
    fn test_cli_install_self() {
        let cli = Cli::try_parse_from([
            "jarinstaller",
            "--install-self",
            "--self-path",
            "/opt/jarinstaller-0.3.0.jar",
        ])
        .unwrap();
        assert!(cli.install_self);
        assert_eq!(cli.self_path, Some(PathBuf::from("/opt/jarinstaller-0.3.0.jar")));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["jarinstaller", "list", "-v", "--root", "/tmp/jars"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/jars")));
    }
}
