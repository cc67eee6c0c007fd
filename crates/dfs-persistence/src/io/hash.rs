//! Source file fingerprints, used to tell whether a cached player pool still
//! matches the salary file it was parsed from.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{PersistenceError, Result};

/// Hex-encoded SHA-256 of a file's contents.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let read_error = |e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    };
    let mut reader = BufReader::new(File::open(path).map_err(read_error)?);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher).map_err(read_error)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Whether the file still hashes to `expected_hash`.
pub fn verify_file_hash(path: &Path, expected_hash: &str) -> Result<bool> {
    Ok(compute_file_hash(path)?.eq_ignore_ascii_case(expected_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn hashes_salary_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();
        file.flush().unwrap();

        let hash = compute_file_hash(file.path()).unwrap();
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(verify_file_hash(file.path(), &hash.to_uppercase()).unwrap());
        assert!(!verify_file_hash(file.path(), "00").unwrap());
    }

    #[test]
    fn missing_file_reports_read() {
        let err = compute_file_hash(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { operation: "read", .. }));
    }
}
