//! Read helpers that annotate I/O failures with the offending path

use crate::{Error, NormalizedPath, Result};
use std::fs;

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_text_returns_file_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "hello").unwrap();

        let content = read_text(&NormalizedPath::new(&file)).unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn read_text_reports_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.txt");

        let err = read_text(&NormalizedPath::new(&missing)).unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
