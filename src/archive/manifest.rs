//! Entry-point detection for jar archives
//!
//! A jar is runnable with `java -jar` only when `META-INF/MANIFEST.MF` names a
//! `Main-Class`. Installing anything else would produce a launcher that fails
//! at first use, so install refuses up front.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{InstallerError, Result, read_failed};

const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
const MAIN_CLASS: &str = "Main-Class";

/// Return the jar's `Main-Class`, or `MissingEntryPoint` if it has none.
///
/// Files that are not zip archives at all are also reported as
/// `MissingEntryPoint`; only real I/O failures become read errors.
pub fn ensure_entry_point(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| read_failed(path, e))?;

    let mut archive = match ZipArchive::new(file) {
        Ok(archive) => archive,
        Err(ZipError::Io(e)) => return Err(read_failed(path, e)),
        Err(e) => return Err(missing_entry_point(path, format!("not a jar archive: {e}"))),
    };

    let mut manifest = match archive.by_name(MANIFEST_PATH) {
        Ok(entry) => entry,
        Err(ZipError::Io(e)) => return Err(read_failed(path, e)),
        Err(e) => return Err(missing_entry_point(path, format!("{MANIFEST_PATH}: {e}"))),
    };

    let mut text = String::new();
    manifest
        .read_to_string(&mut text)
        .map_err(|e| read_failed(path, e))?;

    let main_class = parse_main_class(&text)
        .ok_or_else(|| missing_entry_point(path, format!("no {MAIN_CLASS} in {MANIFEST_PATH}")))?;

    tracing::debug!(jar = %path.display(), %main_class, "found entry point");
    Ok(main_class)
}

/// Extract `Main-Class` from manifest text.
///
/// Attribute names are case-insensitive and long values continue on lines
/// that start with a single space.
pub fn parse_main_class(manifest: &str) -> Option<String> {
    let mut main_class: Option<String> = None;
    let mut in_main_class = false;

    for line in manifest.lines() {
        if let Some(rest) = line.strip_prefix(' ') {
            if in_main_class {
                if let Some(value) = &mut main_class {
                    value.push_str(rest.trim_end());
                }
            }
            continue;
        }

        // A blank line ends the main section
        if line.trim().is_empty() {
            break;
        }

        in_main_class = false;
        if let Some((key, value)) = line.split_once(':') {
            if key.trim().eq_ignore_ascii_case(MAIN_CLASS) {
                in_main_class = true;
                main_class = Some(value.trim().to_string());
            }
        }
    }

    main_class.filter(|value| !value.is_empty())
}

fn missing_entry_point(path: &Path, reason: String) -> InstallerError {
    InstallerError::MissingEntryPoint {
        path: path.display().to_string(),
        reason,
    }
}
