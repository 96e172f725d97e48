//! I/O boundary traits for testability
//!
//! Services read column files through these traits, so tests can swap in
//! an in-memory implementation.

use std::io;
use std::path::Path;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Filesystem backed by `std::fs`.
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_written_file_when_reading_then_returns_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("columns.toml");
        std::fs::write(&path, "columns = []").unwrap();

        let fs = RealFileSystem;
        assert!(fs.exists(&path));
        assert!(fs.is_file(&path));
        assert!(!fs.is_file(dir.path()));
        assert_eq!(fs.read_to_string(&path).unwrap(), "columns = []");
    }

    #[test]
    fn given_missing_file_when_reading_then_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let fs = RealFileSystem;
        assert!(!fs.exists(&path));
        assert_eq!(
            fs.read_to_string(&path).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
