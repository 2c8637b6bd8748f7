//! The preferences record: recent projects plus saved window placements.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "recentProjects": ["/home/me/Projects/Shooter", "/home/me/Projects/Racer"],
//!   "editorWindow": {"x": 0, "y": 0, "width": 1280, "height": 720, "fullscreen": false},
//!   "playerWindow": {"x": 0, "y": 0, "width": 800, "height": 600, "fullscreen": false}
//! }
//! ```
//!
//! Both window entries are optional and are omitted from the file when unset.
//! Keys the editor does not know about are carried in [`PreferencesRecord::extra`]
//! and written back unchanged, so a newer editor build can add keys without
//! an older build erasing them.
//!
//! # Recent projects (for beginners)
//!
//! The recent-projects list is a most-recently-used (MRU) list: index 0 is
//! the project the user opened last.  Opening a project that is already in
//! the list moves it to the front instead of adding a second copy.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Saved placement and size of a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    /// Horizontal position of the window's top-left corner, in pixels.
    pub x: i32,
    /// Vertical position of the window's top-left corner, in pixels.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Whether the window covered the whole display when it was saved.
    #[serde(default)]
    pub fullscreen: bool,
}

impl WindowGeometry {
    /// Creates the geometry of a non-fullscreen window.
    pub fn windowed(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fullscreen: false,
        }
    }
}

/// The persisted preferences document.
///
/// `PreferencesRecord::default()` is the "empty" record used on first run and
/// whenever the on-disk file cannot be parsed: no recent projects and no
/// saved windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesRecord {
    /// Project paths, most recent first.  Never contains duplicates once
    /// [`register_recent_project`](Self::register_recent_project) has run.
    #[serde(default)]
    pub recent_projects: Vec<String>,

    /// Placement of the main editor window, captured at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_window: Option<WindowGeometry>,

    /// Placement of the game player window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_window: Option<WindowGeometry>,

    /// Top-level keys not modelled above, preserved across a read/write cycle.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PreferencesRecord {
    /// Makes `path` the most recent project.
    ///
    /// Any existing occurrence is removed first (exact string match), so the
    /// path appears exactly once, at index 0.
    pub fn register_recent_project(&mut self, path: &str) {
        if let Some(index) = self.recent_projects.iter().position(|p| p == path) {
            self.recent_projects.remove(index);
        }
        self.recent_projects.insert(0, path.to_string());
        debug!("registered recent project {path:?}");
    }

    /// Removes the first occurrence of `path` from the recent projects.
    ///
    /// Returns `true` if an entry was removed.  Later duplicates (which can
    /// only exist in hand-edited files) are left in place.
    pub fn unregister_recent_project(&mut self, path: &str) -> bool {
        match self.recent_projects.iter().position(|p| p == path) {
            Some(index) => {
                self.recent_projects.remove(index);
                debug!("unregistered recent project {path:?}");
                true
            }
            None => false,
        }
    }

    /// Drops every recent project for which `exists` returns `false`.
    ///
    /// The surviving entries keep their relative order.  Every entry is
    /// checked exactly once, including entries directly after a removed one.
    ///
    /// Returns the number of entries removed.
    pub fn retain_existing_projects<F>(&mut self, mut exists: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.recent_projects.len();
        self.recent_projects.retain(|path| exists(path));
        let removed = before - self.recent_projects.len();
        if removed > 0 {
            debug!("pruned {removed} missing recent project(s)");
        }
        removed
    }

    /// Empties the recent-projects list.
    pub fn clear_recent_projects(&mut self) {
        self.recent_projects.clear();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
