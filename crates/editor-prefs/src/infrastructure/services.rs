//! Editor service handle: the one place the preferences store lives.
//!
//! The editor builds an [`EditorServices`] during startup and passes it (or
//! a reference to it) to every component that needs preferences.  Because
//! the handle owns exactly one [`PreferencesStore`], there is one store per
//! editor process without any global state.
//!
//! ```ignore
//! let mut services = EditorServices::start(Arc::new(NativeFileSystem::new()), Some(display), StoreConfig::default())?;
//! services.preferences_mut().register_recent_project(&project_path);
//! // ... editor runs ...
//! services.shutdown();
//! ```

use std::sync::Arc;

use tracing::info;

use crate::application::config::StoreConfig;
use crate::application::preferences_store::{
    DisplaySubsystem, FileSystem, PreferencesError, PreferencesStore, WriteOutcome,
};

/// Long-lived services owned by the running editor.
pub struct EditorServices {
    preferences: PreferencesStore,
}

impl EditorServices {
    /// Wraps an already constructed store.  Does not read the file.
    pub fn new(preferences: PreferencesStore) -> Self {
        Self { preferences }
    }

    /// Builds the store on `file_system` and loads the preferences file.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError`] if the preferences file cannot be
    /// located, created, or read.  A corrupted file is not an error.
    pub fn start(
        file_system: Arc<dyn FileSystem>,
        display: Option<Arc<dyn DisplaySubsystem>>,
        config: StoreConfig,
    ) -> Result<Self, PreferencesError> {
        let mut preferences = PreferencesStore::new(file_system, display, config);
        preferences.read()?;
        Ok(Self::new(preferences))
    }

    /// The editor's preferences store.
    pub fn preferences(&self) -> &PreferencesStore {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferencesStore {
        &mut self.preferences
    }

    /// Saves preferences and releases the services.
    pub fn shutdown(mut self) -> WriteOutcome {
        let outcome = self.preferences.write();
        info!("editor services shut down (preferences: {outcome:?})");
        outcome
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
