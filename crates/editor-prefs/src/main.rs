//! `editor-prefs`: inspect and edit the Atomic editor's `prefs.json`.
//!
//! Runs the same [`PreferencesStore`] the editor uses, so every rule the
//! editor applies (MRU ordering, pruning of missing projects, refusing to
//! overwrite a corrupted file) applies here too.
//!
//! # Usage
//!
//! ```text
//! editor-prefs [OPTIONS] <COMMAND>
//!
//! Commands:
//!   path            Print the preferences file path
//!   show            Print the current preferences
//!   add-recent      Register a recent project
//!   remove-recent   Unregister a recent project
//!   prune-recent    Drop recent projects that no longer exist
//!   clear-recent    Delete all recent projects
//!   player-window   Save the player window placement
//!   reset           Replace the preferences with defaults
//!
//! Options:
//!   --dir <DIR>                 Use DIR instead of the platform directory
//!   --app <NAME>                Application name [default: AtomicEditor]
//!   --window <X,Y,WxH>          Editor window to record on save
//!   --fullscreen                Record the editor window as fullscreen
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Default        | Description                     |
//! |--------------------|----------------|---------------------------------|
//! | `EDITOR_PREFS_DIR` | (platform)     | Directory holding `prefs.json`  |
//! | `EDITOR_PREFS_APP` | `AtomicEditor` | Application name in the path    |
//! | `RUST_LOG`         | `info`         | Log filter                      |

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use editor_prefs::application::config::StoreConfig;
use editor_prefs::application::preferences_store::{
    DisplaySubsystem, PreferencesStore, WriteOutcome,
};
use editor_prefs::infrastructure::display::FixedDisplay;
use editor_prefs::infrastructure::services::EditorServices;
use editor_prefs::infrastructure::storage::NativeFileSystem;
use editor_prefs_core::encode_document;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit the Atomic editor preferences file.
#[derive(Debug, Parser)]
#[command(
    name = "editor-prefs",
    about = "Inspect and edit the Atomic editor preferences file",
    version
)]
struct Cli {
    /// Directory holding prefs.json, instead of the platform application
    /// data directory.
    #[arg(long, env = "EDITOR_PREFS_DIR")]
    dir: Option<PathBuf>,

    /// Application name used to build the platform preferences path.
    #[arg(long, default_value = "AtomicEditor", env = "EDITOR_PREFS_APP")]
    app: String,

    /// Editor window placement recorded on save, as X,Y,WIDTHxHEIGHT.
    ///
    /// Without this flag (and without --fullscreen) the saved editor window
    /// is left as it is.
    #[arg(long, global = true, value_name = "X,Y,WxH")]
    window: Option<FixedDisplay>,

    /// Record the editor window as fullscreen on save.
    #[arg(long, global = true)]
    fullscreen: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the preferences file path.
    Path,
    /// Print the current preferences as JSON.
    Show,
    /// Make PATH the most recent project.
    AddRecent { path: String },
    /// Remove PATH from the recent projects.
    RemoveRecent { path: String },
    /// Drop recent projects whose paths no longer exist.
    PruneRecent,
    /// Delete all recent projects.
    ClearRecent,
    /// Save the player window placement.
    PlayerWindow {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
        width: i32,
        height: i32,
    },
    /// Replace the preferences with an empty default.
    Reset,
}

impl Cli {
    fn store_config(&self) -> StoreConfig {
        StoreConfig {
            app_name: self.app.clone(),
            directory_override: self.dir.clone(),
            ..StoreConfig::default()
        }
    }

    fn display(&self) -> Option<Arc<dyn DisplaySubsystem>> {
        let display = match (self.window, self.fullscreen) {
            (None, false) => return None,
            (Some(window), false) => window,
            (Some(window), true) => window.into_fullscreen(),
            (None, true) => FixedDisplay::windowed(0, 0, 0, 0).into_fullscreen(),
        };
        Some(Arc::new(display))
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `show` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = PreferencesStore::new(
        Arc::new(NativeFileSystem::new()),
        cli.display(),
        cli.store_config(),
    );
    let path = store
        .preferences_path()
        .context("failed to resolve preferences path")?;

    // `path` must not create the file, so it is answered before loading.
    if let Command::Path = cli.command {
        println!("{}", path.display());
        return Ok(());
    }

    let mut services = EditorServices::new(store);
    services
        .preferences_mut()
        .read()
        .context("failed to load preferences")?;

    if !apply(services.preferences_mut(), cli.command)? {
        return Ok(());
    }

    match services.shutdown() {
        WriteOutcome::Written => Ok(()),
        WriteOutcome::SkippedCorrupted => bail!(
            "{} could not be parsed; fix or delete it before editing",
            path.display()
        ),
        WriteOutcome::SkippedNotLoaded => {
            bail!("preferences at {} were not loaded; nothing saved", path.display())
        }
        WriteOutcome::Failed => bail!("failed to save preferences to {}", path.display()),
    }
}

/// Applies `command` to a loaded store.  Returns `true` when the store has
/// changed and must be saved.
fn apply(prefs: &mut PreferencesStore, command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Path => return Ok(false),
        Command::Show => {
            if prefs.is_corrupted() {
                eprintln!("warning: preferences file is corrupted; showing defaults");
            }
            let text = encode_document(prefs.record()).context("failed to encode preferences")?;
            println!("{text}");
            return Ok(false);
        }
        Command::AddRecent { path } => prefs.register_recent_project(&path),
        Command::RemoveRecent { path } => prefs.unregister_recent_project(&path),
        Command::PruneRecent => {
            let removed = prefs.update_recent_projects();
            println!("removed {removed} missing project(s)");
        }
        Command::ClearRecent => prefs.delete_recent_projects(),
        Command::PlayerWindow {
            x,
            y,
            width,
            height,
        } => prefs.save_player_window_data(x, y, width, height),
        Command::Reset => prefs.use_default_config(),
    }
    Ok(true)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
