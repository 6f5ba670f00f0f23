//! Environment-driven configuration for the `studio` binary.
//!
//! # Storage Structure
//!
//! ```text
//! ~/.studio/
//! └── items.json    # Default item collection
//! ```
//!
//! # Environment Variables
//!
//! - `STUDIO_STATE_DIR`: Override the base state directory
//! - `STUDIO_ITEMS_FILE`: Override the item file
//! - `STUDIO_VIEW_MODE`: Default calendar view (`two-weeks` or `month`)
//!
//! Variables may also be set in a `.env.local` file in the working directory.

use std::path::PathBuf;

use studio_calendar::ViewMode;
use tracing::warn;

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "STUDIO_STATE_DIR";

/// Environment variable for the item file.
pub const ITEMS_FILE_ENV: &str = "STUDIO_ITEMS_FILE";

/// Environment variable for the default view mode.
pub const VIEW_MODE_ENV: &str = "STUDIO_VIEW_MODE";

/// Local dotenv file loaded at startup.
pub const DOTENV_FILE: &str = ".env.local";

const DEFAULT_STATE_DIR: &str = ".studio";
const ITEMS_FILE_NAME: &str = "items.json";

/// Get the Studio state directory.
///
/// 1. `STUDIO_STATE_DIR` environment variable if set
/// 2. `~/.studio` if home directory is available
/// 3. `.studio` in current directory as fallback
pub fn state_dir() -> PathBuf {
    std::env::var(STATE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_STATE_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
        })
}

/// Get the default item file (`<state_dir>/items.json`).
pub fn items_file() -> PathBuf {
    state_dir().join(ITEMS_FILE_NAME)
}

/// Get the default view mode from `STUDIO_VIEW_MODE`.
pub fn default_view_mode() -> ViewMode {
    resolve_view_mode(std::env::var(VIEW_MODE_ENV).ok().as_deref())
}

/// Parses a configured view mode, falling back to the two-week view.
pub fn resolve_view_mode(value: Option<&str>) -> ViewMode {
    match value.map(str::parse::<ViewMode>) {
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            warn!(error = %e, "ignoring {}", VIEW_MODE_ENV);
            ViewMode::default()
        }
        None => ViewMode::default(),
    }
}

/// Loads `.env.local` if present.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::from_filename(DOTENV_FILE) {
        if !e.not_found() {
            eprintln!("Warning: failed to load {}: {}", DOTENV_FILE, e);
        }
    }
}
