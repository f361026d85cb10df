use std::fs;
use std::path::Path;

use crate::logging::RunLog;

/// Make sure `path` exists as a directory, creating missing parents.
///
/// Never fails: problems are logged and the caller carries on, so the real
/// error surfaces later when the directory is used.
pub fn ensure_directory(path: &Path, log: &RunLog) {
    if path.as_os_str().is_empty() {
        log.error("Error creating directory: empty path");
        return;
    }

    if path.exists() {
        log.info(format!("Directory '{}' already exists.", path.display()));
        return;
    }

    match fs::create_dir_all(path) {
        Ok(()) => log.info(format!("Directory '{}' created successfully.", path.display())),
        Err(e) => log.error(format!("Error creating directory '{}': {}", path.display(), e)),
    }
}
