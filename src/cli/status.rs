use clap::Parser;
use std::path::PathBuf;

/// Arguments for the status command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check whether a built jar is the installed one:\n    jarinstaller status build/libs/tool-1.2.0.jar")]
pub struct StatusArgs {
    /// Path to a jar
    pub path: PathBuf,
}
