//! Uninstall operation
//!
//! Accepts either a jar (`test-1.0.0.jar`, any directory part is ignored) or
//! a launcher name (`test`). Whatever exists of the pair is removed, except
//! that a launcher running a different jar than the one named is kept.

use std::io::Write;

use crate::archive::{NameAndVersion, base_name, has_archive_extension};
use crate::error::Result;
use crate::launcher;

use super::Installer;

/// How an uninstall argument is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallTarget {
    /// Jar file name; the launcher name is derived from it
    Archive(String),
    /// Launcher name; the jar is recovered from the launcher script
    Launcher(String),
}

impl UninstallTarget {
    pub fn parse(path_or_name: &str) -> Self {
        let name = base_name(path_or_name).to_string();
        if has_archive_extension(&name) {
            UninstallTarget::Archive(name)
        } else {
            UninstallTarget::Launcher(name)
        }
    }
}

impl Installer {
    /// Remove an installed jar and its launcher.
    ///
    /// Returns `false` (after saying so on `out`) when there is nothing to
    /// remove; returns `true` once at least one file was removed.
    pub fn uninstall(&self, path_or_name: &str, out: &mut dyn Write) -> Result<bool> {
        let _span = tracing::debug_span!("uninstall", arg = path_or_name).entered();
        let format = self.config.format;
        let bin_display = self.display(self.store.bin_dir());

        let (archive_name, script_name, launcher_ours) = match UninstallTarget::parse(path_or_name) {
            UninstallTarget::Archive(file_name) => {
                let name = NameAndVersion::parse(&file_name).name;
                let script_name = format.script_file_name(&name);
                // The launcher may already run another version of the jar
                let launcher_ours = match launcher::read_embedded_archive_name(
                    &self.store.launcher_path(&script_name),
                ) {
                    Some(embedded) if embedded != file_name => {
                        tracing::debug!(script = %script_name, %embedded, "launcher runs another jar");
                        writeln!(out, "Keeping {script_name}, it runs {embedded}")?;
                        false
                    }
                    _ => true,
                };
                (Some(file_name), script_name, launcher_ours)
            }
            UninstallTarget::Launcher(name) => {
                let script_name = format.script_file_name(&name);
                if !self.store.launcher_exists_for(&script_name) {
                    writeln!(out, "There is no {script_name} in {bin_display}")?;
                    return Ok(false);
                }
                let archive_name =
                    launcher::read_embedded_archive_name(&self.store.launcher_path(&script_name));
                if archive_name.is_none() {
                    tracing::debug!(script = %script_name, "launcher does not name a jar");
                }
                (archive_name, script_name, true)
            }
        };

        let archive_present = archive_name
            .as_deref()
            .is_some_and(|name| self.store.archive_exists_for(name));
        let launcher_present = launcher_ours && self.store.launcher_exists_for(&script_name);

        if !archive_present && !launcher_present {
            let archives_display = self.display(self.store.archives_dir());
            let archive = archive_name.as_deref().unwrap_or(path_or_name);
            if launcher_ours {
                writeln!(
                    out,
                    "There is no {archive} in {archives_display} and no {script_name} in {bin_display}"
                )?;
            } else {
                writeln!(out, "There is no {archive} in {archives_display}")?;
            }
            return Ok(false);
        }

        if let Some(archive_name) = archive_name.as_deref().filter(|_| archive_present) {
            writeln!(
                out,
                "Removing {}",
                self.display(&self.store.archive_path(archive_name))
            )?;
            self.store.remove_archive(archive_name)?;
        }

        if launcher_present {
            writeln!(
                out,
                "Removing {}",
                self.display(&self.store.launcher_path(&script_name))
            )?;
            self.store.remove_launcher(&script_name)?;
        }

        Ok(true)
    }
}
