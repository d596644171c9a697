//! # File I/O Module
//!
//! Every file this crate writes (the CSV export and the settings file) goes
//! through [`write_atomic`]:
//! 1. Write the bytes to a sibling `.tmp` file
//! 2. Sync to disk (fsync)
//! 3. Rename over the destination (atomic on most filesystems)
//!
//! An interrupted save therefore never leaves a half-written file behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gut_core::file_io::{read_to_string, write_atomic};
//! use std::path::Path;
//!
//! let path = Path::new("ranking.csv");
//! write_atomic(path, b"id,label\n")?;
//! assert_eq!(read_to_string(path)?, "id,label\n");
//! # Ok::<(), gut_core::errors::GutError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::{GutError, GutResult};

/// Temp file path used while saving `path` (e.g. `out.csv` -> `out.csv.tmp`).
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let extension = tmp
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp.set_extension(extension);
    tmp
}

/// Write bytes to `path` with atomic write semantics.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> GutResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        GutError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        GutError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        GutError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        GutError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}

/// Read a whole UTF-8 file.
pub fn read_to_string(path: &Path) -> GutResult<String> {
    let mut file = File::open(path).map_err(|e| {
        GutError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        GutError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(tmp_path_for(Path::new("/out/ranking.csv")), Path::new("/out/ranking.csv.tmp"));
        assert_eq!(tmp_path_for(Path::new("/out/ranking")), Path::new("/out/ranking.tmp"));
    }

    #[test]
    fn test_write_and_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ranking.csv");

        write_atomic(&path, "Nº,Ação\n".as_bytes()).unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "Nº,Ação\n");

        // Temp file should not exist after successful save
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ranking.csv");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("ranking.csv");

        let err = write_atomic(&path, b"x").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = read_to_string(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, GutError::FileError { .. }));
    }
}
