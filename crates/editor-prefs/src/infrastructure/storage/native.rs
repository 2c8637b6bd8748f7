//! `std::fs`-backed implementation of [`FileSystem`].

use std::io;
use std::path::{Path, PathBuf};

use crate::application::preferences_store::FileSystem;

/// Native file system adapter.
///
/// The preferences directory is `<data dir>/<app>/<category>`, where the
/// data directory comes from [`dirs::data_dir`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn preferences_dir(&self, app: &str, category: &str) -> Option<PathBuf> {
        dirs::data_dir().map(|base| base.join(app).join(category))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("editor_prefs_native_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_then_read_returns_same_text() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("prefs.json");
        let fs = NativeFileSystem::new();

        // Act
        fs.write_string(&path, "{\"a\": 1}").expect("write");
        let text = fs.read_to_string(&path).expect("read");

        // Assert
        assert_eq!(text, "{\"a\": 1}");

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let dir = temp_dir();
        let path = dir.join("prefs.json");
        let fs = NativeFileSystem::new();

        fs.write_string(&path, "a much longer first version").expect("write");
        fs.write_string(&path, "{}").expect("write");

        assert_eq!(fs.read_to_string(&path).expect("read"), "{}");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_exists_covers_directories_but_file_exists_does_not() {
        let dir = temp_dir();
        let fs = NativeFileSystem::new();

        assert!(fs.exists(&dir));
        assert!(!fs.file_exists(&dir));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_missing_file_returns_not_found() {
        let fs = NativeFileSystem::new();
        let path = PathBuf::from("/nonexistent/path/that/cannot/exist/prefs.json");

        let err = fs.read_to_string(&path).expect_err("must fail");

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_create_dir_all_creates_nested_directories() {
        let dir = temp_dir();
        let nested = dir.join("AtomicEditor").join("Preferences");
        let fs = NativeFileSystem::new();

        fs.create_dir_all(&nested).expect("create");

        assert!(nested.is_dir());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_preferences_dir_ends_with_app_and_category() {
        // May be None in a stripped CI environment without HOME; that is acceptable.
        if let Some(dir) = NativeFileSystem::new().preferences_dir("AtomicEditor", "Preferences") {
            assert!(
                dir.ends_with("AtomicEditor/Preferences"),
                "unexpected preferences dir {dir:?}"
            );
        }
    }
}
