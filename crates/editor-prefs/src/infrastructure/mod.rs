//! Infrastructure layer for the preferences store.
//!
//! Contains OS-facing adapters: file-system access, the display snapshot
//! source, and the service handle the editor keeps for its lifetime.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `editor_prefs_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`storage`** – [`storage::NativeFileSystem`] backed by `std::fs` and the
//!   platform application data directory, plus an in-memory
//!   [`storage::MemoryFileSystem`] for tests.
//!
//! - **`display`** – [`display::FixedDisplay`], a display whose window state
//!   is supplied up front (CLI flags, tests).
//!
//! - **`services`** – [`services::EditorServices`], the single owner of the
//!   preferences store for the running editor.

pub mod display;
pub mod services;
pub mod storage;
