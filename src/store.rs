//! Install store layout and file operations
//!
//! ```text
//! <root>/
//!   archives/<file>.jar   copied jars
//!   bin/<name>            launcher scripts (<name>.cmd on Windows)
//! ```
//!
//! The filesystem is the only index: there is no manifest or database, and
//! partial entries (a jar without a launcher, or the reverse) are normal.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{InstallerError, Result, remove_failed};

/// Subdirectory holding copied archives
pub const ARCHIVES_DIR: &str = "archives";

/// Subdirectory holding launcher scripts
pub const BIN_DIR: &str = "bin";

#[derive(Debug, Clone)]
pub struct InstallStore {
    root: PathBuf,
    archives_dir: PathBuf,
    bin_dir: PathBuf,
}

impl InstallStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            archives_dir: root.join(ARCHIVES_DIR),
            bin_dir: root.join(BIN_DIR),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archives_dir(&self) -> &Path {
        &self.archives_dir
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    pub fn archive_path(&self, file_name: &str) -> PathBuf {
        self.archives_dir.join(file_name)
    }

    pub fn launcher_path(&self, script_name: &str) -> PathBuf {
        self.bin_dir.join(script_name)
    }

    /// Create `archives/` and `bin/` if absent
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.archives_dir, &self.bin_dir] {
            fs::create_dir_all(dir).map_err(|e| InstallerError::DirectoryCreateFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Copy `src` into `archives/`, replacing any file of the same name.
    ///
    /// When `src` already is the stored copy nothing is copied.
    pub fn copy_in(&self, src: &Path) -> Result<PathBuf> {
        let file_name = src.file_name().ok_or_else(|| InstallerError::NotAnArchive {
            path: src.display().to_string(),
        })?;
        let dest = self.archives_dir.join(file_name);

        if self.holds(src) {
            tracing::debug!(archive = %dest.display(), "archive already in store");
            return Ok(dest);
        }

        fs::copy(src, &dest).map_err(|e| InstallerError::FileCopyFailed {
            from: src.display().to_string(),
            to: dest.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(from = %src.display(), to = %dest.display(), "copied archive");
        Ok(dest)
    }

    /// Delete `archives/<file_name>`. Returns whether a file was removed.
    pub fn remove_archive(&self, file_name: &str) -> Result<bool> {
        remove_if_present(&self.archive_path(file_name))
    }

    /// Delete `bin/<script_name>`. Returns whether a file was removed.
    pub fn remove_launcher(&self, script_name: &str) -> Result<bool> {
        remove_if_present(&self.launcher_path(script_name))
    }

    /// File names in `bin/`, sorted. Empty when `bin/` does not exist.
    pub fn list_launchers(&self) -> Result<Vec<String>> {
        if !self.bin_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.bin_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| InstallerError::IoError {
                message: format!("Failed to list {}: {}", self.bin_dir.display(), e),
                source: Some(Box::new(e)),
            })?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    pub fn archive_exists_for(&self, file_name: &str) -> bool {
        self.archive_path(file_name).is_file()
    }

    pub fn launcher_exists_for(&self, script_name: &str) -> bool {
        self.launcher_path(script_name).is_file()
    }

    /// Whether `path` resolves to the same file as `archives/<its file name>`
    pub fn holds(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };

        match (
            dunce::canonicalize(path),
            dunce::canonicalize(self.archives_dir.join(file_name)),
        ) {
            (Ok(given), Ok(stored)) => given == stored,
            _ => false,
        }
    }
}

fn remove_if_present(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(remove_failed(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_temp_dir;

    fn store_in(temp: &tempfile::TempDir) -> InstallStore {
        InstallStore::new(temp.path().join(".jars"))
    }

    #[test]
    fn test_layout() {
        let store = InstallStore::new("/home/u/.jars");
        assert_eq!(store.archives_dir(), Path::new("/home/u/.jars/archives"));
        assert_eq!(store.bin_dir(), Path::new("/home/u/.jars/bin"));
        assert_eq!(
            store.archive_path("a-1.0.jar"),
            PathBuf::from("/home/u/.jars/archives/a-1.0.jar")
        );
        assert_eq!(store.launcher_path("a"), PathBuf::from("/home/u/.jars/bin/a"));
    }

    #[test]
    fn test_ensure_dirs_is_idempotent() {
        let temp = create_temp_dir();
        let store = store_in(&temp);
        store.ensure_dirs().unwrap();
        store.ensure_dirs().unwrap();
        assert!(store.archives_dir().is_dir());
        assert!(store.bin_dir().is_dir());
    }

    #[test]
    fn test_copy_in_replaces_existing() {
        let temp = create_temp_dir();
        let store = store_in(&temp);
        store.ensure_dirs().unwrap();

        let src = temp.path().join("app-1.0.jar");
        std::fs::write(&src, "first").unwrap();
        store.copy_in(&src).unwrap();

        std::fs::write(&src, "second version").unwrap();
        let dest = store.copy_in(&src).unwrap();

        assert_eq!(dest, store.archive_path("app-1.0.jar"));
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "second version");
    }

    #[test]
    fn test_copy_in_from_store_keeps_content() {
        let temp = create_temp_dir();
        let store = store_in(&temp);
        store.ensure_dirs().unwrap();

        let stored = store.archive_path("self.jar");
        std::fs::write(&stored, "payload").unwrap();

        let dest = store.copy_in(&stored).unwrap();
        assert_eq!(dest, stored);
        assert_eq!(std::fs::read_to_string(&stored).unwrap(), "payload");
    }

    #[test]
    fn test_remove_missing_is_not_an_error() {
        let temp = create_temp_dir();
        let store = store_in(&temp);
        assert!(!store.remove_archive("nope.jar").unwrap());
        assert!(!store.remove_launcher("nope").unwrap());
    }

    #[test]
    fn test_remove_existing() {
        let temp = create_temp_dir();
        let store = store_in(&temp);
        store.ensure_dirs().unwrap();
        std::fs::write(store.archive_path("a.jar"), "x").unwrap();
        std::fs::write(store.launcher_path("a"), "x").unwrap();

        assert!(store.remove_archive("a.jar").unwrap());
        assert!(store.remove_launcher("a").unwrap());
        assert!(!store.archive_exists_for("a.jar"));
        assert!(!store.launcher_exists_for("a"));
    }

    #[test]
    fn test_list_launchers_sorted_and_files_only() {
        let temp = create_temp_dir();
        let store = store_in(&temp);
        assert!(store.list_launchers().unwrap().is_empty());

        store.ensure_dirs().unwrap();
        std::fs::write(store.launcher_path("zeta"), "").unwrap();
        std::fs::write(store.launcher_path("alpha"), "").unwrap();
        std::fs::create_dir(store.bin_dir().join("subdir")).unwrap();

        assert_eq!(store.list_launchers().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_holds() {
        let temp = create_temp_dir();
        let store = store_in(&temp);
        store.ensure_dirs().unwrap();

        let outside = temp.path().join("x.jar");
        std::fs::write(&outside, "x").unwrap();
        assert!(!store.holds(&outside));

        store.copy_in(&outside).unwrap();
        assert!(!store.holds(&outside));
        assert!(store.holds(&store.archive_path("x.jar")));

        let dotted = store.archives_dir().join("..").join(ARCHIVES_DIR).join("x.jar");
        assert!(store.holds(&dotted));

        assert!(!store.holds(&store.archive_path("missing.jar")));
    }
}
