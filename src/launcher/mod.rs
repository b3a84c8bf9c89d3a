//! Launcher scripts
//!
//! A launcher is a tiny script in `bin/` that runs `java -jar` on an archive
//! in `archives/`. The absolute archive path is embedded as
//! `JARINSTALLER_JAR_PATH=<path>`; that line is the only link between a
//! command name and its jar, so uninstall and list read it back.
//!
//! Two formats exist, selected once per process:
//! - [`ScriptFormat::Posix`]: bash script named `<name>` (see [`posix`])
//! - [`ScriptFormat::Cmd`]: batch file named `<name>.cmd` (see [`cmd`])

pub mod cmd;
pub mod posix;

use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::base_name;
use crate::error::{Result, write_failed};

/// Variable holding the install root
pub const ROOT_KEY: &str = "JARINSTALLER_PATH";
/// Variable holding the absolute path of the installed jar
pub const JAR_PATH_KEY: &str = "JARINSTALLER_JAR_PATH";
/// Variable holding the absolute path of the launcher itself
pub const SCRIPT_PATH_KEY: &str = "JARINSTALLER_SCRIPT_PATH";

/// Command used to run installed jars
pub const JAVA_COMMAND: &str = "java";

/// Launcher script flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Posix,
    Cmd,
}

impl ScriptFormat {
    /// Format for the platform this binary was built for
    pub fn native() -> Self {
        if cfg!(windows) {
            ScriptFormat::Cmd
        } else {
            ScriptFormat::Posix
        }
    }

    /// File name of the launcher for a command name
    pub fn script_file_name(self, name: &str) -> String {
        match self {
            ScriptFormat::Posix => name.to_string(),
            ScriptFormat::Cmd => cmd::file_name(name),
        }
    }

    /// Human readable kind, used in install output
    pub fn describe(self) -> &'static str {
        match self {
            ScriptFormat::Posix => "bash script",
            ScriptFormat::Cmd => "cmd script",
        }
    }

    fn render(self, paths: &LauncherPaths) -> String {
        match self {
            ScriptFormat::Posix => posix::render(paths),
            ScriptFormat::Cmd => cmd::render(paths),
        }
    }
}

/// Absolute paths embedded into a launcher
#[derive(Debug, Clone)]
pub struct LauncherPaths {
    pub root: PathBuf,
    pub archive: PathBuf,
    pub script: PathBuf,
}

impl LauncherPaths {
    fn resolve(root: &Path, archive: &Path, script: &Path) -> Result<Self> {
        Ok(Self {
            root: std::path::absolute(root)?,
            archive: std::path::absolute(archive)?,
            script: std::path::absolute(script)?,
        })
    }
}

/// Write (or overwrite) a launcher at `script` that runs `archive`.
///
/// POSIX launchers are made executable.
pub fn write(format: ScriptFormat, script: &Path, archive: &Path, root: &Path) -> Result<()> {
    let paths = LauncherPaths::resolve(root, archive, script)?;
    let content = format.render(&paths);

    fs::write(script, content).map_err(|e| write_failed(script, e))?;

    if format == ScriptFormat::Posix {
        make_executable(script)?;
    }

    tracing::debug!(
        script = %script.display(),
        archive = %paths.archive.display(),
        "wrote launcher"
    );
    Ok(())
}

/// File name of the jar embedded in the launcher at `script`.
///
/// `None` when the script cannot be read or carries no jar path; callers treat
/// that as "not installed by us".
pub fn read_embedded_archive_name(script: &Path) -> Option<String> {
    let content = match fs::read_to_string(script) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(script = %script.display(), error = %e, "cannot read launcher");
            return None;
        }
    };

    let embedded = extract_embedded_path(&content)?;
    let name = base_name(&embedded);
    (!name.is_empty()).then(|| name.to_string())
}

/// Value of the `JARINSTALLER_JAR_PATH=` assignment, unquoted
pub fn extract_embedded_path(content: &str) -> Option<String> {
    let marker = format!("{JAR_PATH_KEY}=");

    content
        .lines()
        .find_map(|line| line.split_once(marker.as_str()).map(|(_, value)| value))
        .map(|value| unquote(value.trim_end_matches('\r').trim()))
        .filter(|value| !value.is_empty())
}

fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return value[1..value.len() - 1].to_string();
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].replace("'\\''", "'");
    }
    value.to_string()
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| write_failed(path, e))?
        .permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms).map_err(|e| write_failed(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
