//! Error types and handling for jarinstaller
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every filesystem failure is folded into [`InstallerError`] so it can bubble
//! up to the CLI boundary, which prints it and exits non-zero. "Nothing to do"
//! outcomes (e.g. uninstalling something that is not there) are not errors.

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for jarinstaller operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallerError {
    // Archive errors
    #[error("Not an installable jar file: {path}")]
    #[diagnostic(
        code(jarinstaller::archive::not_an_archive),
        help("Pass the path of an existing .jar file, not a directory")
    )]
    NotAnArchive { path: String },

    #[error("Jar file manifest does not have Main-Class: {path}")]
    #[diagnostic(
        code(jarinstaller::archive::missing_entry_point),
        help("Only runnable jars (with Main-Class in META-INF/MANIFEST.MF) can be installed")
    )]
    MissingEntryPoint { path: String, reason: String },

    // Configuration errors
    #[error("Could not determine home directory")]
    #[diagnostic(
        code(jarinstaller::config::home_not_found),
        help("Set HOME, or pass --root to choose an install directory")
    )]
    HomeDirNotFound,

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(jarinstaller::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(jarinstaller::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(jarinstaller::fs::copy_failed))]
    FileCopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to remove file: {path}: {reason}")]
    #[diagnostic(code(jarinstaller::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(jarinstaller::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(jarinstaller::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<std::io::Error> for InstallerError {
    fn from(err: std::io::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias for jarinstaller operations
pub type Result<T> = std::result::Result<T, InstallerError>;

pub fn read_failed(path: &Path, err: impl std::fmt::Display) -> InstallerError {
    InstallerError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn write_failed(path: &Path, err: impl std::fmt::Display) -> InstallerError {
    InstallerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn remove_failed(path: &Path, err: impl std::fmt::Display) -> InstallerError {
    InstallerError::FileRemoveFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
