//! Filesystem operations
//!
//! Async wrappers over `tokio::fs` for the handful of primitives path
//! creation needs. Each call is a suspension point; nothing here blocks the
//! runtime thread.

use std::path::Path;

use tokio::fs;

use crate::error::FilesystemError;

/// Kind of an existing directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Anything else (socket, fifo, device, ...)
    Other,
}

/// Check whether anything exists at `path`
///
/// Errors while probing (for example a permission problem on a parent) are
/// reported as "does not exist", matching a plain access check.
pub async fn path_exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// Create a single directory; the parent must already exist
pub async fn create_directory(path: &Path) -> Result<(), FilesystemError> {
    fs::create_dir(path)
        .await
        .map_err(|source| FilesystemError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

/// Create an empty file, failing if any entry already exists at `path`
pub async fn create_empty_file(path: &Path) -> Result<(), FilesystemError> {
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .map(drop)
        .map_err(|source| FilesystemError::CreateFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Report whether `path` is a file or a directory (symlinks are followed)
pub async fn stat_entry(path: &Path) -> Result<EntryKind, FilesystemError> {
    let metadata = fs::metadata(path)
        .await
        .map_err(|source| FilesystemError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

    let kind = if metadata.is_file() {
        EntryKind::File
    } else if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    };
    Ok(kind)
}
