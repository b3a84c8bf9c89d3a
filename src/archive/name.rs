//! Name and version derivation from jar file names
//!
//! `my-tool-1.4.2.jar` becomes the command `my-tool` with version `1.4.2`.
//! The launcher file name is the only place this pair is ever persisted.

/// File extension of installable archives
pub const ARCHIVE_EXTENSION: &str = ".jar";

/// Command name and version derived from an archive file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAndVersion {
    /// Launcher name, never empty
    pub name: String,
    /// Version string, empty when none could be derived
    pub version: String,
}

impl NameAndVersion {
    fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    /// Derive name and version from a file name or path.
    ///
    /// Never fails:
    /// 1. `<name>-<digits>.<digits><anything>.jar` splits at the right-most
    ///    hyphen that starts such a version
    /// 2. otherwise the last hyphen splits name from version
    /// 3. otherwise the name is the file name without `.jar`, version empty
    ///
    /// A name that would be empty, `.` or `..` is replaced by the whole file
    /// name.
    pub fn parse(file_name: &str) -> Self {
        let file_name = base_name(file_name);
        let parsed = Self::split(file_name);

        // `.` and `..` cannot name a launcher file
        if matches!(parsed.name.as_str(), "." | "..") {
            return Self::new(file_name, "");
        }
        parsed
    }

    fn split(file_name: &str) -> Self {
        if let Some((name, version)) = split_at_version(file_name) {
            return Self::new(name, version);
        }

        if let Some((name, last)) = file_name.rsplit_once('-') {
            if !name.is_empty() {
                return Self::new(name, strip_extension(last));
            }
        }

        let stem = strip_extension(file_name);
        if stem.is_empty() {
            Self::new(file_name, "")
        } else {
            Self::new(stem, "")
        }
    }
}

/// Last path component, accepting both `/` and `\` separators
pub fn base_name(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
}

/// Whether a path or name refers to an archive rather than a launcher
pub fn has_archive_extension(path: &str) -> bool {
    path.ends_with(ARCHIVE_EXTENSION)
}

fn strip_extension(name: &str) -> &str {
    name.strip_suffix(ARCHIVE_EXTENSION).unwrap_or(name)
}

fn split_at_version(file_name: &str) -> Option<(&str, &str)> {
    let stem = file_name.strip_suffix(ARCHIVE_EXTENSION)?;

    stem.match_indices('-').rev().find_map(|(idx, _)| {
        let version = &stem[idx + 1..];
        (idx > 0 && starts_with_version_number(version)).then(|| (&stem[..idx], version))
    })
}

/// `\d+\.\d+` at the start of `s`
fn starts_with_version_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    let major = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if major == 0 {
        return false;
    }

    bytes.get(major) == Some(&b'.') && bytes.get(major + 1).is_some_and(u8::is_ascii_digit)
}
