//! Runtime configuration
//!
//! Everything that would otherwise be process-global (home directory, install
//! root, `PATH`, launcher format) is resolved once at startup into a [`Config`]
//! and handed to the components that need it.

use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result};
use crate::launcher::ScriptFormat;

/// Default install root directory name under the user's home
pub const DEFAULT_ROOT_DIR: &str = ".jars";

/// Shell profile that receives the PATH snippet
pub const PROFILE_FILE: &str = ".profile";

/// Environment variable overriding the install root
pub const ROOT_ENV: &str = "JARINSTALLER_HOME";

/// Environment variable naming the archive installed by `--install-self`
pub const SELF_ENV: &str = "JARINSTALLER_SELF";

/// Environment variable with a `tracing` filter directive
pub const LOG_ENV: &str = "JARINSTALLER_LOG";

#[derive(Debug, Clone)]
pub struct Config {
    /// User home directory
    pub home: PathBuf,
    /// Install root holding `archives/` and `bin/`
    pub root: PathBuf,
    /// Shell profile that gets the PATH snippet
    pub profile: PathBuf,
    /// Value of `PATH` at startup, if set
    pub path_var: Option<String>,
    /// Launcher flavour to write and read
    pub format: ScriptFormat,
}

impl Config {
    /// Defaults for a given home directory: `<home>/.jars`, `<home>/.profile`,
    /// no `PATH`, native launcher format.
    pub fn for_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            root: home.join(DEFAULT_ROOT_DIR),
            profile: home.join(PROFILE_FILE),
            home,
            path_var: None,
            format: ScriptFormat::native(),
        }
    }

    /// Resolve configuration from the process environment.
    ///
    /// `root` comes from `--root` / `JARINSTALLER_HOME` and is made absolute.
    pub fn from_env(root: Option<PathBuf>) -> Result<Self> {
        let home = dirs::home_dir().ok_or(InstallerError::HomeDirNotFound)?;
        let mut config = Self::for_home(home).with_path_var(std::env::var("PATH").ok());

        if let Some(root) = root {
            config = config.with_root(std::path::absolute(root)?);
        }

        tracing::debug!(
            home = %config.home.display(),
            root = %config.root.display(),
            "resolved configuration"
        );
        Ok(config)
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    #[must_use]
    pub fn with_path_var(mut self, path_var: Option<String>) -> Self {
        self.path_var = path_var;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_format(mut self, format: ScriptFormat) -> Self {
        self.format = format;
        self
    }

    /// Path for user-facing messages, with the home directory shown as `~`
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.home) {
            Ok(rel) if rel.as_os_str().is_empty() => "~".to_string(),
            Ok(rel) => format!("~/{}", rel.display()),
            Err(_) => path.display().to_string(),
        }
    }
}
