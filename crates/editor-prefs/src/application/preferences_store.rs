//! PreferencesStore: loads, mutates, and saves the editor's `prefs.json`.
//!
//! The store is created once during editor startup and handed to whichever
//! component needs it (see `infrastructure::services::EditorServices`).
//! There is no global instance.
//!
//! # Lifecycle
//!
//! ```text
//! new()  ──►  read()  ──►  register / unregister / save window …  ──►  write()
//!              │
//!              └─ decode failure ──► corrupted = true ──► write() is a no-op
//! ```
//!
//! - `new()` only wires the collaborators; the record starts out empty and
//!   `write()` refuses to save it until a `read()` has loaded the file.
//! - `read()` creates the file as `{}` on first run, then parses it.
//! - All mutating methods touch memory only.  Nothing reaches the disk until
//!   the next `write()`, usually at editor shutdown.
//!
//! # Corrupted files
//!
//! If the file is not UTF-8 or cannot be parsed, the store falls back to an
//! empty record and refuses to write for the rest of the session (or until a
//! later `read()` succeeds).  The damaged file stays on disk exactly as it was so the user
//! can recover it by hand.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use editor_prefs_core::{
    decode_document, encode_document, PreferencesRecord, WindowGeometry, EMPTY_DOCUMENT,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::config::StoreConfig;

/// Error type for preferences file operations.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// The platform application data directory could not be determined.
    #[error("could not determine the application preferences directory")]
    NoPreferencesDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// File system operations the store needs.
///
/// The infrastructure layer provides a `std::fs` implementation and an
/// in-memory one for tests.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if `path` names an existing file or directory.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` names an existing regular file.
    fn file_exists(&self, path: &Path) -> bool;

    /// Returns the per-application preferences directory for `app` and
    /// `category`, or `None` when the platform base directory is unknown.
    ///
    /// The directory is not created by this call.
    fn preferences_dir(&self, app: &str, category: &str) -> Option<PathBuf>;

    /// Creates `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Reads the whole file at `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replaces the contents of the file at `path` with `contents`,
    /// creating the file if needed.
    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The editor's graphics/display subsystem, as far as the store cares.
#[cfg_attr(test, mockall::automock)]
pub trait DisplaySubsystem: Send + Sync {
    fn is_fullscreen(&self) -> bool;

    /// Position of the window's top-left corner in desktop coordinates.
    fn window_position(&self) -> (i32, i32);

    fn width(&self) -> i32;

    fn height(&self) -> i32;
}

/// Result of a [`PreferencesStore::write`] call.
///
/// Writing never returns an error to the caller; this tells tests and the
/// CLI what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file now holds the current record.
    Written,
    /// Nothing was written because the file failed to decode at load time.
    SkippedCorrupted,
    /// Nothing was written because no `read()` has loaded the file yet.
    SkippedNotLoaded,
    /// The file could not be opened or written.  A warning was logged.
    Failed,
}

/// The preferences store use case.
pub struct PreferencesStore {
    file_system: Arc<dyn FileSystem>,
    display: Option<Arc<dyn DisplaySubsystem>>,
    config: StoreConfig,
    record: PreferencesRecord,
    loaded: bool,
    corrupted: bool,
}

impl PreferencesStore {
    /// Creates a store with an empty record.  Does not touch the disk.
    ///
    /// Pass `None` for `display` when the editor runs without a window
    /// (headless tools, tests); `write()` then leaves `editorWindow` as is.
    pub fn new(
        file_system: Arc<dyn FileSystem>,
        display: Option<Arc<dyn DisplaySubsystem>>,
        config: StoreConfig,
    ) -> Self {
        Self {
            file_system,
            display,
            config,
            record: PreferencesRecord::default(),
            loaded: false,
            corrupted: false,
        }
    }

    /// Resolves the full path of the preferences file, creating its
    /// directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::NoPreferencesDir`] when no override is
    /// configured and the platform directory is unknown, or
    /// [`PreferencesError::Io`] if the directory cannot be created.
    pub fn preferences_path(&self) -> Result<PathBuf, PreferencesError> {
        let dir = match &self.config.directory_override {
            Some(dir) => dir.clone(),
            None => self
                .file_system
                .preferences_dir(&self.config.app_name, &self.config.category)
                .ok_or(PreferencesError::NoPreferencesDir)?,
        };

        self.file_system
            .create_dir_all(&dir)
            .map_err(|source| PreferencesError::Io {
                path: dir.clone(),
                source,
            })?;

        let path = dir.join(&self.config.file_name);
        debug!("preferences path resolved to {}", path.display());
        Ok(path)
    }

    /// Loads the preferences file into memory.
    ///
    /// Creates the file containing `{}` if it does not exist.  A file that
    /// is not UTF-8 or fails to parse marks the store corrupted and installs
    /// the default record; that case is logged, not returned as an error.
    ///
    /// Until a `read()` succeeds, `write()` leaves the file alone.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError`] if the path cannot be resolved or the
    /// file cannot be created or read.
    pub fn read(&mut self) -> Result<(), PreferencesError> {
        self.loaded = false;
        let path = self.preferences_path()?;

        if !self.file_system.file_exists(&path) {
            info!("no preferences file at {}, creating one", path.display());
            self.file_system
                .write_string(&path, EMPTY_DOCUMENT)
                .map_err(|source| PreferencesError::Io {
                    path: path.clone(),
                    source,
                })?;
        }

        let text = match self.file_system.read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                self.mark_corrupted(&path, &e);
                return Ok(());
            }
            Err(source) => return Err(PreferencesError::Io { path, source }),
        };

        match decode_document(&text) {
            Ok(record) => {
                info!(
                    "loaded preferences from {} ({} recent project(s))",
                    path.display(),
                    record.recent_projects.len()
                );
                self.record = record;
                self.loaded = true;
                self.corrupted = false;
            }
            Err(e) => self.mark_corrupted(&path, &e),
        }
        Ok(())
    }

    /// Saves the in-memory record, replacing the file's contents.
    ///
    /// The current editor window placement is captured from the display
    /// subsystem into `editorWindow`.  The record only takes the new
    /// placement once the file has been written.
    pub fn write(&mut self) -> WriteOutcome {
        if self.corrupted {
            debug!("preferences were corrupted at load; not writing");
            return WriteOutcome::SkippedCorrupted;
        }
        if !self.loaded {
            debug!("preferences were never loaded; not writing");
            return WriteOutcome::SkippedNotLoaded;
        }

        let path = match self.preferences_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("cannot save preferences: {e}");
                return WriteOutcome::Failed;
            }
        };

        let mut record = self.record.clone();
        if let Some(geometry) = self.editor_window_snapshot() {
            record.editor_window = Some(geometry);
        }

        let text = match encode_document(&record) {
            Ok(text) => text,
            Err(e) => {
                warn!("cannot save preferences: {e}");
                return WriteOutcome::Failed;
            }
        };

        match self.file_system.write_string(&path, &text) {
            Ok(()) => {
                info!("saved preferences to {}", path.display());
                self.record = record;
                WriteOutcome::Written
            }
            Err(e) => {
                warn!("cannot write preferences to {}: {e}", path.display());
                WriteOutcome::Failed
            }
        }
    }

    /// Makes `path` the most recent project, then prunes missing projects.
    pub fn register_recent_project(&mut self, path: &str) {
        self.record.register_recent_project(path);
        self.update_recent_projects();
    }

    /// Removes the first occurrence of `path`, then prunes missing projects.
    pub fn unregister_recent_project(&mut self, path: &str) {
        self.record.unregister_recent_project(path);
        self.update_recent_projects();
    }

    /// Removes every recent project whose path no longer exists on disk.
    ///
    /// Returns the number of entries removed.
    pub fn update_recent_projects(&mut self) -> usize {
        let file_system = &self.file_system;
        self.record
            .retain_existing_projects(|path| file_system.exists(Path::new(path)))
    }

    pub fn delete_recent_projects(&mut self) {
        self.record.clear_recent_projects();
    }

    /// Records the game player window's placement.  The display subsystem is
    /// not consulted; the player window is never saved as fullscreen.
    pub fn save_player_window_data(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.record.player_window = Some(WindowGeometry::windowed(x, y, width, height));
    }

    /// Replaces the record with an empty default.
    pub fn use_default_config(&mut self) {
        self.record = PreferencesRecord::default();
    }

    pub fn editor_window(&self) -> Option<&WindowGeometry> {
        self.record.editor_window.as_ref()
    }

    pub fn player_window(&self) -> Option<&WindowGeometry> {
        self.record.player_window.as_ref()
    }

    /// Recent project paths, most recent first.
    pub fn recent_projects(&self) -> &[String] {
        &self.record.recent_projects
    }

    pub fn record(&self) -> &PreferencesRecord {
        &self.record
    }

    /// `true` when the last `read()` found an undecodable file.
    pub fn is_corrupted(&self) -> bool {
        self.corrupted
    }

    /// `true` once a `read()` has installed the file's record.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn mark_corrupted(&mut self, path: &Path, error: &dyn std::fmt::Display) {
        warn!(
            "preferences file {} is corrupted, using defaults and disabling saves: {error}",
            path.display()
        );
        self.corrupted = true;
        self.use_default_config();
    }

    /// The editor window placement to save, or `None` without a display.
    ///
    /// A fullscreen display has no meaningful window rectangle, so position
    /// and size keep their last windowed values.
    fn editor_window_snapshot(&self) -> Option<WindowGeometry> {
        let display = self.display.as_ref()?;

        let geometry = if display.is_fullscreen() {
            WindowGeometry {
                fullscreen: true,
                ..self.record.editor_window.unwrap_or_default()
            }
        } else {
            let (x, y) = display.window_position();
            WindowGeometry::windowed(x, y, display.width(), display.height())
        };

        debug!("captured editor window {geometry:?}");
        Some(geometry)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
