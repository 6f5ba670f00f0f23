//! Loading and saving item collections as JSON arrays.

use std::fs;
use std::io::Write;
use std::path::Path;

use studio_models::Item;
use tracing::debug;

use crate::error::{CliError, Result};

/// Reads a JSON array of items from `path`.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let data = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<Item> = serde_json::from_str(&data)?;
    debug!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

/// Writes items to `path` atomically (temp file in the same directory, then
/// rename).
pub fn save_items(path: &Path, items: &[Item]) -> Result<()> {
    let io_err = |source: std::io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let json = serde_json::to_string_pretty(items)?;
    let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    temp_file.write_all(json.as_bytes()).map_err(io_err)?;
    temp_file.write_all(b"\n").map_err(io_err)?;
    temp_file.flush().map_err(io_err)?;
    temp_file.persist(path).map_err(|e| io_err(e.error))?;

    debug!(path = %path.display(), count = items.len(), "saved items");
    Ok(())
}
