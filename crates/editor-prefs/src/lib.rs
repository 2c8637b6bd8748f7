//! editor-prefs library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does editor-prefs do? (for beginners)
//!
//! The editor keeps a small JSON file, `prefs.json`, in the user's
//! application data directory.  It remembers:
//!
//! 1. The projects the user opened recently, most recent first, so the
//!    welcome screen can offer them again.
//! 2. Where the editor window was and how large it was, so the next session
//!    opens in the same place.
//! 3. The size and position of the game player window.
//!
//! The editor reads the file once at startup and writes it back at shutdown.
//! If the file is damaged, the editor runs with empty preferences and never
//! overwrites the damaged file, so the user can repair it by hand.

/// Application layer: the preferences store use case and its collaborator traits.
pub mod application;

/// Infrastructure layer: file system and display adapters, editor service handle.
pub mod infrastructure;
