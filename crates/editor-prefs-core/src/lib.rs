//! # editor-prefs-core
//!
//! Shared library for the Atomic editor preferences store containing the
//! persisted document model, the recent-projects rules, and the JSON codec
//! for `prefs.json`.
//!
//! It has zero dependencies on OS APIs, the file system, or the display
//! subsystem.  Everything that touches the outside world lives in the
//! `editor-prefs` crate and reaches this crate through plain function calls.
//!
//! # Architecture overview (for beginners)
//!
//! The editor remembers a small amount of state between sessions: which
//! projects were opened recently, and where its windows were on screen.
//! That state is one JSON document on disk.
//!
//! - **`domain`** – The in-memory shape of that document
//!   ([`PreferencesRecord`], [`WindowGeometry`]) and the rules for keeping the
//!   recent-projects list ordered and free of duplicates.
//!
//! - **`document`** – How the record is turned into JSON text and back,
//!   including the normalisation applied to files that predate the
//!   `recentProjects` key.

pub mod document;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `editor_prefs_core::PreferencesRecord` instead of the full module path.
pub use document::codec::{decode_document, encode_document, DocumentError, EMPTY_DOCUMENT};
pub use domain::record::{PreferencesRecord, WindowGeometry};
