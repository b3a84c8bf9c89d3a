//! Test fixtures shared by unit tests.
//!
//! Builds real jar files with the `zip` writer and scratch homes in temp
//! directories, so tests never touch the developer's `~/.jars`.
//!
//! ```ignore
//! let temp = create_temp_dir();
//! let jar = write_jar(temp.path(), "test-1.0.0.jar", Some("com.example.Main"));
//! let installer = create_installer(&temp);
//! ```

#![allow(clippy::expect_used)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use crate::config::Config;
use crate::launcher::ScriptFormat;
use crate::operations::Installer;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a jar at `dir/file_name`. With `main_class` the manifest names it,
/// without it the manifest only has a version.
pub fn write_jar(dir: &Path, file_name: &str, main_class: Option<&str>) -> PathBuf {
    let mut manifest = String::from("Manifest-Version: 1.0\r\nCreated-By: jarinstaller tests\r\n");
    if let Some(main_class) = main_class {
        manifest.push_str(&format!("Main-Class: {main_class}\r\n"));
    }
    manifest.push_str("\r\n");

    write_zip(
        dir,
        file_name,
        &[
            ("META-INF/MANIFEST.MF", manifest.as_str()),
            ("com/example/Main.class", "not really bytecode"),
        ],
    )
}

/// Write a jar with no `META-INF/MANIFEST.MF` at all
pub fn write_jar_without_manifest(dir: &Path, file_name: &str) -> PathBuf {
    write_zip(dir, file_name, &[("readme.txt", "no manifest here")])
}

fn write_zip(dir: &Path, file_name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(file_name);
    let file = File::create(&path).expect("Failed to create jar file");
    let mut writer = zip::ZipWriter::new(file);

    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }

    writer.finish().expect("Failed to finish jar");
    path
}

/// Config rooted in `temp` with `bin/` off `PATH` and POSIX launchers
pub fn create_config(temp: &TempDir) -> Config {
    Config::for_home(temp.path())
        .with_path_var(Some("/usr/bin:/bin".to_string()))
        .with_format(ScriptFormat::Posix)
}

pub fn create_installer(temp: &TempDir) -> Installer {
    Installer::new(create_config(temp))
}
