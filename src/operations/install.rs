//! Install operation
//!
//! Copies a runnable jar into `archives/`, makes sure `bin/` is reachable from
//! `PATH`, and writes the launcher. Steps that completed before a failure stay
//! completed; nothing is rolled back.

use std::io::Write;
use std::path::Path;

use crate::archive::{NameAndVersion, ensure_entry_point};
use crate::error::{InstallerError, Result};
use crate::launcher;
use crate::profile;

use super::Installer;

/// What is being installed, only affects the messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallMode {
    #[default]
    Archive,
    /// jarinstaller installing its own archive
    SelfInstall,
}

impl Installer {
    /// Install `archive` and write its launcher. Returns `true` on success.
    ///
    /// Installing the same jar again replaces the stored copy and rewrites the
    /// launcher.
    pub fn install(&self, archive: &Path, mode: InstallMode, out: &mut dyn Write) -> Result<bool> {
        let _span = tracing::debug_span!("install", archive = %archive.display()).entered();

        if archive.is_dir() || !archive.exists() {
            return Err(InstallerError::NotAnArchive {
                path: archive.display().to_string(),
            });
        }
        ensure_entry_point(archive)?;

        // Settle the launcher name before anything is written
        let file_name = archive
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| InstallerError::NotAnArchive {
                path: archive.display().to_string(),
            })?;
        let names = NameAndVersion::parse(&file_name);
        let format = self.config.format;
        let script = self
            .store
            .launcher_path(&format.script_file_name(&names.name));

        self.store.ensure_dirs()?;

        let already_stored = self.is_in_archive_dir(archive);
        let stored = self.store.copy_in(archive)?;
        let stored_display = self.display(&stored);
        match (already_stored, mode) {
            (true, _) => writeln!(out, "Using {stored_display}")?,
            (false, InstallMode::SelfInstall) => writeln!(out, "Copied self to {stored_display}")?,
            (false, InstallMode::Archive) => {
                writeln!(out, "Copied {} to {stored_display}", archive.display())?;
            }
        }

        let bin_dir = self.store.bin_dir();
        if profile::ensure_bin_on_path(&self.config, bin_dir)? {
            writeln!(
                out,
                "Adding {} to $PATH. Made changes to {}",
                self.display(bin_dir),
                self.display(&self.config.profile)
            )?;
        }

        launcher::write(format, &script, &stored, self.store.root())?;
        writeln!(out, "Created {} {}", format.describe(), self.display(&script))?;

        tracing::debug!(name = %names.name, version = %names.version, "installed");
        Ok(true)
    }
}
