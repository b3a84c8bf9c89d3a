//! Uninstall command CLI wrapper
//!
//! Business logic lives in operations/uninstall.rs. Nothing to remove is
//! reported but is not an error.

use std::path::PathBuf;

use crate::cli::UninstallArgs;
use crate::error::Result;

use super::open_installer;

/// Run uninstall command
pub fn run(root: Option<PathBuf>, args: UninstallArgs) -> Result<()> {
    let installer = open_installer(root)?;
    let removed = installer.uninstall(&args.target, &mut std::io::stdout().lock())?;
    tracing::debug!(removed, "uninstall finished");
    Ok(())
}
