use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{PersistenceError, Result};

/// Read a JSON document. A missing file yields `Ok(None)`.
pub fn read_json<T: DeserializeOwned>(path: &Path, what: &'static str) -> Result<Option<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let value = serde_json::from_slice(&bytes).map_err(|source| {
        PersistenceError::Deserialization {
            what,
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(path = %path.display(), "loaded {what}");
    Ok(Some(value))
}
