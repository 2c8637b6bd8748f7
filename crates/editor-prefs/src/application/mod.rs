//! Application layer use cases for the editor preferences store.
//!
//! # What lives here?
//!
//! - **`config`** – [`config::StoreConfig`]: which application name,
//!   category, and file name make up the preferences path.
//!
//! - **`preferences_store`** – The [`preferences_store::PreferencesStore`]
//!   use case.  It owns the in-memory record, loads and saves it through an
//!   injected [`preferences_store::FileSystem`], and snapshots the editor
//!   window through an optional [`preferences_store::DisplaySubsystem`].

pub mod config;
pub mod preferences_store;
