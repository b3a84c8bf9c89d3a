//! Bash launcher format

use std::path::Path;

use super::{JAR_PATH_KEY, JAVA_COMMAND, LauncherPaths, ROOT_KEY, SCRIPT_PATH_KEY};

pub fn render(paths: &LauncherPaths) -> String {
    let root = format!("{}/", paths.root.display());

    format!(
        "#!/bin/bash\n\
         \n\
         export {ROOT_KEY}={root}\n\
         export {JAR_PATH_KEY}={archive}\n\
         export {SCRIPT_PATH_KEY}={script}\n\
         \n\
         {JAVA_COMMAND} -jar \"${JAR_PATH_KEY}\" \"$@\"\n",
        root = quote(&root),
        archive = quote_path(&paths.archive),
        script = quote_path(&paths.script),
    )
}

fn quote_path(path: &Path) -> String {
    quote(&path.display().to_string())
}

/// Single-quote `value` only when the shell would otherwise split or expand it
fn quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+,:@%=".contains(c));

    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "'\\''"))
    }
}
