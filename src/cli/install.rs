use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install a jar as the `tool` command:\n    jarinstaller install build/libs/tool-1.2.0.jar\n\n\
                   Install into a different root:\n    jarinstaller install tool.jar --root /opt/jars")]
pub struct InstallArgs {
    /// Path to a jar whose manifest names a Main-Class
    pub path: PathBuf,
}
