//! Install command CLI wrapper
//!
//! Business logic lives in operations/install.rs.

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::error::{InstallerError, Result};
use crate::operations::InstallMode;

use super::open_installer;

/// Run install command
pub fn run(root: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let installer = open_installer(root)?;
    installer.install(&args.path, InstallMode::Archive, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Run `--install-self`
///
/// `self_path` is `--self-path` / `JARINSTALLER_SELF` when given, otherwise
/// the running executable.
pub fn run_self(root: Option<PathBuf>, self_path: Option<PathBuf>) -> Result<()> {
    let archive = match self_path {
        Some(path) => path,
        None => std::env::current_exe().map_err(|e| InstallerError::IoError {
            message: format!("Failed to locate the running executable: {e}"),
            source: Some(Box::new(e)),
        })?,
    };
    tracing::debug!(archive = %archive.display(), "installing self");

    let installer = open_installer(root)?;
    installer.install(&archive, InstallMode::SelfInstall, &mut std::io::stdout().lock())?;
    Ok(())
}
