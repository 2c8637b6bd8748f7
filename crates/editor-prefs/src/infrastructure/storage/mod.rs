//! Storage infrastructure: preferences file persistence.
//!
//! The application layer sees storage only through the
//! [`FileSystem`](crate::application::preferences_store::FileSystem) trait.
//! This module provides its implementations:
//!
//! - `native` – real files under the platform application data directory:
//!   - Windows:  `%APPDATA%\AtomicEditor\Preferences\prefs.json`
//!   - Linux:    `~/.local/share/AtomicEditor/Preferences/prefs.json`
//!   - macOS:    `~/Library/Application Support/AtomicEditor/Preferences/prefs.json`
//!
//! - `memory` – a map of paths to contents, always compiled so tests on any
//!   platform can use it without touching the disk.

pub mod memory;
pub mod native;

pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
