//! PATH setup through the user's shell profile
//!
//! When `bin/` is not on `PATH`, a single line is appended to `~/.profile`:
//!
//! ```text
//! PATH=$PATH:$HOME/.jars/bin # Add jarinstaller bin to PATH
//! ```
//!
//! `PATH` is checked entry by entry. The profile is checked by substring, so
//! a line the user wrote by hand counts too and the snippet is never added
//! twice.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::config::{Config, DEFAULT_ROOT_DIR};
use crate::error::{Result, read_failed, write_failed};
use crate::store::BIN_DIR;

/// Trailing comment marking the line we add
pub const SNIPPET_COMMENT: &str = "# Add jarinstaller bin to PATH";

/// How `bin_dir` is written into the profile: `$HOME/...` when under home
pub fn bin_dir_reference(config: &Config, bin_dir: &Path) -> String {
    match bin_dir.strip_prefix(&config.home) {
        Ok(rel) if !rel.as_os_str().is_empty() => {
            format!("$HOME/{}", slashed(rel))
        }
        _ => bin_dir.display().to_string(),
    }
}

/// Whether `bin_dir` is one of the entries of a `PATH` value
pub fn path_contains(path_var: &str, bin_dir: &Path) -> bool {
    std::env::split_paths(path_var).any(|entry| entry == bin_dir)
}

/// Substrings of a profile that count as a reference to `bin_dir`
fn markers(config: &Config, bin_dir: &Path) -> Vec<String> {
    let mut markers = vec![
        bin_dir.display().to_string(),
        bin_dir_reference(config, bin_dir),
    ];
    if let Ok(rel) = bin_dir.strip_prefix(&config.home) {
        if !rel.as_os_str().is_empty() {
            markers.push(format!("~/{}", slashed(rel)));
        }
    }
    // Any `.jars/bin` line counts when the root is the default one
    if config.root == config.home.join(DEFAULT_ROOT_DIR) {
        markers.push(format!("/{DEFAULT_ROOT_DIR}/{BIN_DIR}"));
    }
    markers
}

fn slashed(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether profile `text` already mentions `bin_dir`
pub fn references_bin_dir(text: &str, config: &Config, bin_dir: &Path) -> bool {
    markers(config, bin_dir)
        .iter()
        .any(|marker| text.contains(marker.as_str()))
}

/// The line appended to the profile, surrounded by newlines
pub fn snippet(config: &Config, bin_dir: &Path) -> String {
    format!(
        "\nPATH=$PATH:{} {SNIPPET_COMMENT}\n",
        bin_dir_reference(config, bin_dir)
    )
}

/// Append the PATH snippet to the profile unless `bin_dir` is already on
/// `PATH` or already mentioned in the profile. Returns whether it wrote.
pub fn ensure_bin_on_path(config: &Config, bin_dir: &Path) -> Result<bool> {
    if config
        .path_var
        .as_deref()
        .is_some_and(|path| path_contains(path, bin_dir))
    {
        tracing::debug!("bin directory already on PATH");
        return Ok(false);
    }

    let profile = &config.profile;
    if profile.exists() {
        let bytes = fs::read(profile).map_err(|e| read_failed(profile, e))?;
        if references_bin_dir(&String::from_utf8_lossy(&bytes), config, bin_dir) {
            tracing::debug!(profile = %profile.display(), "profile already extends PATH");
            return Ok(false);
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(profile)
        .map_err(|e| write_failed(profile, e))?;
    file.write_all(snippet(config, bin_dir).as_bytes())
        .map_err(|e| write_failed(profile, e))?;

    tracing::debug!(profile = %profile.display(), "appended PATH snippet");
    Ok(true)
}
