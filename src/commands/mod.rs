//! Command implementations for jarinstaller CLI
//!
//! Each command is a thin wrapper: resolve [`Config`], build an
//! [`Installer`] and hand stdout to the operation.

pub mod completions;
pub mod install;
pub mod list;
pub mod status;
pub mod uninstall;
pub mod version;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::operations::Installer;

/// Build an installer for the root given on the command line (or the default)
fn open_installer(root: Option<PathBuf>) -> Result<Installer> {
    Ok(Installer::new(Config::from_env(root)?))
}
