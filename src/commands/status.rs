//! Status command CLI wrapper

use std::path::PathBuf;

use crate::cli::StatusArgs;
use crate::error::Result;

use super::open_installer;

/// Run status command
pub fn run(root: Option<PathBuf>, args: StatusArgs) -> Result<()> {
    let installer = open_installer(root)?;
    installer.status(&args.path, &mut std::io::stdout().lock())?;
    Ok(())
}
