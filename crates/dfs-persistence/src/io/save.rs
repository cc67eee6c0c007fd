use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{PersistenceError, Result};

/// Write `value` as pretty JSON through a sibling temp file and a rename, so
/// readers never observe a half-written document.
pub fn write_json_atomic<T: Serialize>(value: &T, path: &Path, what: &'static str) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|source| PersistenceError::Serialization { what, source })?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(&bytes)
        .and_then(|()| file.sync_all())
        .map_err(|e| PersistenceError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote {what}");
    Ok(())
}

/// Delete a file; a file that is already gone is not an error.
pub fn remove_file(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(PersistenceError::Io {
            operation: "delete",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
