//! Domain entities for the editor preferences store.
//!
//! This module contains pure business logic with no infrastructure
//! dependencies.  The existence check used to prune stale recent projects is
//! passed in by the caller as a closure, so the rules here can be unit-tested
//! without touching a real file system.

/// The persisted preferences record and window geometry.
///
/// See [`record::PreferencesRecord`] for the main type.
pub mod record;
