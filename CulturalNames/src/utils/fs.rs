//! Output file helpers
//!
//! Writes are not transactional: a failed build can leave some files of a mod
//! written and others missing.

use std::path::Path;

use crate::error::{Error, Result};

/// Create a directory and its parents.
pub fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path` as UTF-8, replacing any existing file.
///
/// The content is written byte-for-byte; callers add a BOM when the target
/// engine expects one.
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_into_missing_directory_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("file.txt");

        match write_text_file(&path, "x") {
            Err(Error::FileWrite { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected FileWrite, got {other:?}"),
        }
    }

    #[test]
    fn test_create_dir_then_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        create_dir(&nested).unwrap();
        write_text_file(&nested.join("f.txt"), "hello").unwrap();
        assert_eq!(std::fs::read_to_string(nested.join("f.txt")).unwrap(), "hello");
    }
}
