//! Jar archive inspection
//!
//! - [`name`]: derive a command name and version from a jar file name
//! - [`manifest`]: check that a jar is runnable (has `Main-Class`)

pub mod manifest;
pub mod name;

pub use manifest::ensure_entry_point;
pub use name::{NameAndVersion, base_name, has_archive_extension};
