//! Common test utilities for jarinstaller integration tests

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// A scratch home directory with a `~/.jars` root inside it
pub struct TestHome {
    /// Temporary directory
    pub temp: TempDir,
    /// Path used as `HOME`
    pub path: PathBuf,
}

impl TestHome {
    /// Create a new test home
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Install root (`~/.jars`)
    pub fn root(&self) -> PathBuf {
        self.path.join(".jars")
    }

    pub fn archive(&self, file_name: &str) -> PathBuf {
        self.root().join("archives").join(file_name)
    }

    /// Launcher path for `name`, with `.cmd` on Windows
    pub fn launcher(&self, name: &str) -> PathBuf {
        let file_name = if cfg!(windows) {
            format!("{name}.cmd")
        } else {
            name.to_string()
        };
        self.root().join("bin").join(file_name)
    }

    pub fn profile(&self) -> PathBuf {
        self.path.join(".profile")
    }

    /// Write a runnable jar under `build/libs/`
    pub fn create_jar(&self, file_name: &str, main_class: &str) -> PathBuf {
        let manifest = format!("Manifest-Version: 1.0\r\nMain-Class: {main_class}\r\n\r\n");
        self.create_jar_with_manifest(file_name, Some(&manifest))
    }

    /// Write a jar under `build/libs/` with the given manifest, or none at all
    pub fn create_jar_with_manifest(&self, file_name: &str, manifest: Option<&str>) -> PathBuf {
        let dir = self.path.join("build").join("libs");
        std::fs::create_dir_all(&dir).expect("Failed to create jar directory");
        write_jar(&dir, file_name, manifest)
    }

    /// Command for the real binary with `HOME` pointed here and a `PATH`
    /// that does not mention the install root
    pub fn cmd(&self) -> Command {
        let mut cmd = jarinstaller_cmd();
        cmd.env("HOME", &self.path)
            .env("USERPROFILE", &self.path)
            .env("PATH", "/usr/bin:/bin")
            .env_remove("JARINSTALLER_HOME")
            .env_remove("JARINSTALLER_SELF")
            .env_remove("JARINSTALLER_LOG")
            .current_dir(&self.path);
        cmd
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn jarinstaller_cmd() -> Command {
    Command::cargo_bin("jarinstaller").expect("Failed to find jarinstaller binary")
}

pub fn write_jar(dir: &Path, file_name: &str, manifest: Option<&str>) -> PathBuf {
    let path = dir.join(file_name);
    let file = File::create(&path).expect("Failed to create jar");
    let mut writer = zip::ZipWriter::new(file);

    if let Some(manifest) = manifest {
        writer
            .start_file("META-INF/MANIFEST.MF", SimpleFileOptions::default())
            .expect("Failed to start manifest");
        writer
            .write_all(manifest.as_bytes())
            .expect("Failed to write manifest");
    }
    writer
        .start_file("com/example/Main.class", SimpleFileOptions::default())
        .expect("Failed to start class entry");
    writer
        .write_all(b"not really bytecode")
        .expect("Failed to write class entry");

    writer.finish().expect("Failed to finish jar");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_layout() {
        let home = TestHome::new();
        assert!(home.archive("a.jar").starts_with(home.path.join(".jars/archives")));
        assert!(home.profile().ends_with(".profile"));
    }

    #[test]
    fn test_create_jar_is_a_zip() {
        let home = TestHome::new();
        let jar = home.create_jar("tool-1.0.jar", "com.example.Main");
        let archive = zip::ZipArchive::new(File::open(jar).unwrap()).unwrap();
        assert!(archive.file_names().any(|n| n == "META-INF/MANIFEST.MF"));
    }
}
