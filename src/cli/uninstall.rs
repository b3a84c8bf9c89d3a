use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall by command name:\n    jarinstaller uninstall tool\n\n\
                  Uninstall by jar:\n    jarinstaller uninstall build/libs/tool-1.2.0.jar")]
pub struct UninstallArgs {
    /// Launcher name or jar path to uninstall
    #[arg(value_name = "PATH_OR_NAME")]
    pub target: String,
}
