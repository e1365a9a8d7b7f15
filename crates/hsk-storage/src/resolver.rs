//! Storage directory resolution.
//!
//! Downloaded study resources live in per-bucket directories directly
//! under the documents root. Resolution is idempotent: the first call
//! per bucket may create the directory, later calls only verify it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use hsk_model::DirectoryType;

/// Errors from [`ensure_storage_directory`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The target path exists but is not a directory.
    #[error("storage path exists but is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Creating the bucket directory failed.
    #[error("failed to create storage directory {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Resolve the directory for `kind` under `documents_root`, creating it
/// when missing.
///
/// Creation is non-recursive: a missing documents root is a creation
/// failure, not something to repair here. Returns the error to the
/// caller; most call sites want [`resolve_storage_directory`] instead.
pub fn ensure_storage_directory(documents_root: &Path, kind: DirectoryType) -> Result<PathBuf> {
    let target = documents_root.join(kind.dir_name());
    if target.exists() {
        if target.is_dir() {
            return Ok(target);
        }
        return Err(StorageError::NotADirectory { path: target });
    }
    fs::create_dir(&target).map_err(|source| StorageError::Create {
        path: target.clone(),
        source,
    })?;
    Ok(target)
}

/// Resolve the directory for `kind` under `documents_root`.
///
/// Failures are logged with the raw error and come back as `None`; they
/// never escalate past this boundary.
pub fn resolve_storage_directory(documents_root: &Path, kind: DirectoryType) -> Option<PathBuf> {
    match ensure_storage_directory(documents_root, kind) {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::error!("Storage directory unavailable for {} bucket: {}", kind, err);
            None
        }
    }
}
