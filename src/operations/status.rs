//! Installation status checks

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

use super::Installer;

impl Installer {
    /// Report whether `archive` is installed. Returns [`Installer::is_installed`].
    pub fn status(&self, archive: &Path, out: &mut dyn Write) -> Result<bool> {
        let archives_display = self.display(self.store.archives_dir());

        if self.is_in_archive_dir(archive) {
            writeln!(out, "{} is the stored copy in {archives_display}", self.display(archive))?;
            return Ok(true);
        }

        let file_name = archive
            .file_name()
            .map_or_else(|| archive.display().to_string(), |n| n.to_string_lossy().into_owned());
        let installed = self.is_installed(archive);
        if installed {
            writeln!(out, "{file_name} is installed in {archives_display}")?;
        } else {
            writeln!(out, "{file_name} is not installed")?;
        }
        Ok(installed)
    }

    /// Whether `archive` has a same-named copy in `archives/` of equal size.
    ///
    /// Only the byte length is compared, not the content.
    pub fn is_installed(&self, archive: &Path) -> bool {
        let Some(file_name) = archive.file_name() else {
            return false;
        };
        let stored = self.store.archives_dir().join(file_name);

        match (fs::metadata(archive), fs::metadata(&stored)) {
            (Ok(source), Ok(copy)) => {
                source.is_file() && copy.is_file() && source.len() == copy.len()
            }
            _ => false,
        }
    }

    /// Whether `archive` is the copy inside `archives/` itself
    pub fn is_in_archive_dir(&self, archive: &Path) -> bool {
        self.store.holds(archive)
    }
}
