//! Document blob storage.

pub mod filesystem;

use std::path::PathBuf;

pub use filesystem::LocalDocumentStore;

/// Resolve the application data directory.
///
/// Order: `ASISLEGAL_DATA_DIR` env var, then `~/.asislegal`, then
/// `./.asislegal` when no home directory can be determined.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ASISLEGAL_DATA_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".asislegal"))
        .unwrap_or_else(|| PathBuf::from(".asislegal"))
}
