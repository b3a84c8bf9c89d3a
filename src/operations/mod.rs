//! Operations for installing, uninstalling, listing and checking jars
//!
//! [`Installer`] is the single entry point used by the CLI commands. It
//! coordinates:
//! - the archive checks (from the archive module)
//! - the install store layout (from the store module)
//! - launcher scripts (from the launcher module)
//! - PATH setup (from the profile module)
//!
//! Operations report progress as plain lines on the writer they are given.
//! Expected "nothing to do" outcomes return `Ok(false)`; only real failures
//! are errors.

pub mod install;
pub mod list;
pub mod status;
pub mod uninstall;

pub use install::InstallMode;
pub use list::ListOptions;

use crate::config::Config;
use crate::store::InstallStore;

/// Installer bound to one configuration and its store
#[derive(Debug, Clone)]
pub struct Installer {
    config: Config,
    store: InstallStore,
}

impl Installer {
    pub fn new(config: Config) -> Self {
        let store = InstallStore::new(&config.root);
        Self { config, store }
    }

    #[cfg(test)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn store(&self) -> &InstallStore {
        &self.store
    }

    fn display(&self, path: &std::path::Path) -> String {
        self.config.display_path(path)
    }
}
