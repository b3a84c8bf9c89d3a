//! List operation
//!
//! Walks `bin/`, reads each launcher back to find its jar, and prints
//! `launcher -> jar` aligned on the launcher column. Files in `bin/` that do
//! not carry a jar path are not ours and are skipped.

use std::io::Write;
use std::path::PathBuf;

use console::Style;

use crate::archive::NameAndVersion;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::launcher;

use super::Installer;

/// Configuration options for list
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub detailed: bool,
}

impl From<&ListArgs> for ListOptions {
    fn from(args: &ListArgs) -> Self {
        Self {
            detailed: args.detailed,
        }
    }
}

/// One launcher in `bin/` and the jar it points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledEntry {
    /// Launcher file name in `bin/`
    pub launcher: String,
    /// Jar file name embedded in the launcher
    pub archive: String,
    /// Version derived from the jar file name, may be empty
    pub version: String,
    /// Stored jar location
    pub archive_path: PathBuf,
    /// Whether the stored jar still exists
    pub archive_present: bool,
}

impl Installer {
    /// Launchers in `bin/` that point to a jar, sorted by launcher name
    pub fn installed(&self) -> Result<Vec<InstalledEntry>> {
        let mut entries = Vec::new();

        for script_name in self.store.list_launchers()? {
            let Some(archive) =
                launcher::read_embedded_archive_name(&self.store.launcher_path(&script_name))
            else {
                tracing::debug!(script = %script_name, "skipping file without jar path");
                continue;
            };

            let archive_path = self.store.archive_path(&archive);
            entries.push(InstalledEntry {
                version: NameAndVersion::parse(&archive).version,
                archive_present: archive_path.is_file(),
                archive_path,
                archive,
                launcher: script_name,
            });
        }

        Ok(entries)
    }

    /// Print installed jars. Returns how many were listed.
    pub fn list(&self, options: &ListOptions, out: &mut dyn Write) -> Result<usize> {
        let entries = self.installed()?;

        if entries.is_empty() {
            writeln!(out, "No jars installed.")?;
            return Ok(0);
        }

        writeln!(out)?;
        writeln!(out, "\t{}", Style::new().bold().apply_to("Installed jars"))?;
        writeln!(out)?;

        let width = entries
            .iter()
            .map(|entry| entry.launcher.chars().count())
            .max()
            .unwrap_or(0);

        for entry in &entries {
            let missing = if entry.archive_present {
                String::new()
            } else {
                format!(" {}", Style::new().red().apply_to("(missing jar)"))
            };
            writeln!(
                out,
                "{:<width$} -> {}{missing}",
                entry.launcher, entry.archive
            )?;

            if options.detailed {
                let version = if entry.version.is_empty() {
                    "-"
                } else {
                    entry.version.as_str()
                };
                writeln!(out, "{:<width$}    version: {version}", "")?;
                writeln!(
                    out,
                    "{:<width$}    path:    {}",
                    "",
                    self.display(&entry.archive_path)
                )?;
            }
        }

        writeln!(out)?;
        Ok(entries.len())
    }
}
