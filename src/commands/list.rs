//! List command implementation

use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::operations::ListOptions;

use super::open_installer;

/// Run list command
pub fn run(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let installer = open_installer(root)?;
    installer.list(&ListOptions::from(&args), &mut std::io::stdout().lock())?;
    Ok(())
}
