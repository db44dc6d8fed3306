//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::path::Path;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path).map_err(|e| {
            Error::io_msg(format!("Failed to read '{}': {}", path.display(), e))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(|e| {
            Error::io_msg(format!("Failed to write '{}': {}", path.display(), e))
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        std::fs::rename(from, to).map_err(|e| {
            Error::io_msg(format!(
                "Failed to rename '{}' to '{}': {}",
                from.display(),
                to.display(),
                e
            ))
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!("Failed to create directory '{}': {}", path.display(), e))
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> Result<(), Error> {
        std::fs::remove_file(path).map_err(|e| {
            Error::io_msg(format!("Failed to remove file '{}': {}", path.display(), e))
        })
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!("Failed to open '{}' for append: {}", path.display(), e))
            })?;
        Ok(Box::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_rename_read() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        let dir = tmp.path().join("a/b");
        fs.create_dir_all(&dir).unwrap();
        let tmp_path = dir.join("x.json.tmp");
        let path = dir.join("x.json");
        fs.write(&tmp_path, "[]").unwrap();
        fs.rename(&tmp_path, &path).unwrap();
        assert!(!fs.exists(&tmp_path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "[]");
        fs.remove_file(&path).unwrap();
        assert!(!fs.exists(&path));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = StdFileSystem
            .read_to_string(&tmp.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
