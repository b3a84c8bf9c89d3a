//! Windows batch launcher format
//!
//! Values are stored with their quotes (`set KEY="value"`) so that paths with
//! spaces survive `%KEY%` expansion.

use super::{JAR_PATH_KEY, JAVA_COMMAND, LauncherPaths, ROOT_KEY, SCRIPT_PATH_KEY};

pub const EXTENSION: &str = ".cmd";

pub fn file_name(name: &str) -> String {
    if name.ends_with(EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{EXTENSION}")
    }
}

pub fn render(paths: &LauncherPaths) -> String {
    [
        "@echo off".to_string(),
        String::new(),
        format!("set {ROOT_KEY}=\"{}\"", paths.root.display()),
        format!("set {JAR_PATH_KEY}=\"{}\"", paths.archive.display()),
        format!("set {SCRIPT_PATH_KEY}=\"{}\"", paths.script.display()),
        String::new(),
        format!("{JAVA_COMMAND} -jar %{JAR_PATH_KEY}% %*"),
        "exit /b %ERRORLEVEL%".to_string(),
        String::new(),
    ]
    .join("\r\n")
}
