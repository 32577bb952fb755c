//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Create a directory and any missing parents.
///
/// Succeeds when the directory already exists, including when another
/// process created it between the check and the call.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        Error::file_write_failed(path.display().to_string(), e.to_string(), Vec::new())
    })
}

/// Write content to file, replacing anything already there.
///
/// Wraps `fs::write` with consistent `Error::file_write_failed` formatting.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        Error::file_write_failed(path.display().to_string(), e.to_string(), Vec::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("sections");

        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn ensure_dir_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("assets");
        fs::write(&file, "").unwrap();

        let err = ensure_dir(&file).unwrap_err();
        assert_eq!(err.code.as_str(), "file.write_failed");
    }

    #[test]
    fn write_file_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.liquid");

        write_file(&path, "first version, longer").unwrap();
        write_file(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn write_file_returns_error_for_missing_parent() {
        let result = write_file(Path::new("/nonexistent/dir/file.css"), "");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "file.write_failed");
        assert_eq!(err.details["path"], "/nonexistent/dir/file.css");
    }
}
