//! In-memory implementation of [`FileSystem`] for tests.
//!
//! Files are a `HashMap<PathBuf, String>`; directories and "project" paths
//! that should pass an existence check are a `HashSet<PathBuf>`.  Reads and
//! writes can be switched to fail to exercise the store's error paths.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::preferences_store::FileSystem;

#[derive(Default)]
struct MemoryState {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    fail_reads: bool,
    fail_writes: bool,
    write_count: u32,
}

/// A file system that lives entirely in memory.
pub struct MemoryFileSystem {
    root: PathBuf,
    state: Mutex<MemoryState>,
}

impl MemoryFileSystem {
    /// Creates an empty file system whose preferences directories live
    /// under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            state: Mutex::new(MemoryState::default()),
        }
    }

    /// Adds (or replaces) a file.
    pub fn insert_file(&self, path: impl Into<PathBuf>, contents: &str) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.files.insert(path.into(), contents.to_string());
    }

    /// Makes `path` pass [`FileSystem::exists`], e.g. a project directory.
    pub fn insert_dir(&self, path: impl Into<PathBuf>) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.dirs.insert(path.into());
    }

    /// Removes a file or directory entry, as if the user deleted it.
    pub fn remove(&self, path: &Path) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.files.remove(path);
        state.dirs.remove(path);
    }

    /// Returns the current contents of a file.
    pub fn file(&self, path: &Path) -> Option<String> {
        self.state
            .lock()
            .expect("lock poisoned")
            .files
            .get(path)
            .cloned()
    }

    /// When `true`, every `read_to_string` fails with `PermissionDenied`.
    pub fn set_fail_reads(&self, fail: bool) {
        self.state.lock().expect("lock poisoned").fail_reads = fail;
    }

    /// When `true`, every `write_string` fails with `PermissionDenied`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().expect("lock poisoned").fail_writes = fail;
    }

    /// Number of successful `write_string` calls so far.
    pub fn write_count(&self) -> u32 {
        self.state.lock().expect("lock poisoned").write_count
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().expect("lock poisoned");
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.state
            .lock()
            .expect("lock poisoned")
            .files
            .contains_key(path)
    }

    fn preferences_dir(&self, app: &str, category: &str) -> Option<PathBuf> {
        Some(self.root.join(app).join(category))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().expect("lock poisoned");
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.state.lock().expect("lock poisoned").fail_reads {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not readable", path.display()),
            ));
        }
        self.file(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut state = self.state.lock().expect("lock poisoned");
        if state.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            ));
        }
        state.files.insert(path.to_path_buf(), contents.to_string());
        state.write_count += 1;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_dir_is_under_root() {
        let fs = MemoryFileSystem::new("/mem");

        let dir = fs.preferences_dir("AtomicEditor", "Preferences");

        assert_eq!(dir, Some(PathBuf::from("/mem/AtomicEditor/Preferences")));
    }

    #[test]
    fn test_write_then_read_round_trips_and_counts() {
        // Arrange
        let fs = MemoryFileSystem::new("/mem");
        let path = Path::new("/mem/prefs.json");

        // Act
        fs.write_string(path, "{}").expect("write");

        // Assert
        assert_eq!(fs.read_to_string(path).expect("read"), "{}");
        assert!(fs.file_exists(path));
        assert_eq!(fs.write_count(), 1);
    }

    #[test]
    fn test_fail_writes_leaves_contents_unchanged() {
        let fs = MemoryFileSystem::new("/mem");
        let path = Path::new("/mem/prefs.json");
        fs.insert_file(path, "original");
        fs.set_fail_writes(true);

        let err = fs.write_string(path, "new").expect_err("must fail");

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(fs.file(path).as_deref(), Some("original"));
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_create_dir_all_registers_every_ancestor() {
        let fs = MemoryFileSystem::new("/mem");

        fs.create_dir_all(Path::new("/mem/a/b")).expect("create");

        assert!(fs.exists(Path::new("/mem/a/b")));
        assert!(fs.exists(Path::new("/mem/a")));
        assert!(!fs.file_exists(Path::new("/mem/a")));
    }

    #[test]
    fn test_remove_makes_path_missing() {
        let fs = MemoryFileSystem::new("/mem");
        fs.insert_dir("/projects/game");

        fs.remove(Path::new("/projects/game"));

        assert!(!fs.exists(Path::new("/projects/game")));
    }

    #[test]
    fn test_fail_reads_returns_permission_denied() {
        let fs = MemoryFileSystem::new("/mem");
        let path = Path::new("/mem/prefs.json");
        fs.insert_file(path, "{}");
        fs.set_fail_reads(true);

        let err = fs.read_to_string(path).expect_err("must fail");

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_read_missing_file_returns_not_found() {
        let fs = MemoryFileSystem::new("/mem");

        let err = fs.read_to_string(Path::new("/mem/none")).expect_err("must fail");

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
