//! Base directory resolution
//!
//! The user may start from a file (for example the one open in an editor)
//! or from a directory. A file is replaced by the directory containing it.

use std::path::{Path, PathBuf};

use crate::error::BaseDirError;
use crate::infra::filesystem::{self, EntryKind};

/// Resolve the directory new paths are created in
///
/// # Returns
///
/// * `Ok(PathBuf)` - `start` itself if it is a directory, its parent if it is a file
/// * `Err(BaseDirError::NotFound)` - `start` does not exist
pub async fn resolve_base_dir(start: &Path) -> Result<PathBuf, BaseDirError> {
    let kind = match filesystem::stat_entry(start).await {
        Ok(kind) => kind,
        Err(e) if e.is_not_found() => {
            return Err(BaseDirError::NotFound {
                path: start.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    match kind {
        EntryKind::Directory => Ok(start.to_path_buf()),
        EntryKind::File => start
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .ok_or_else(|| BaseDirError::NoParent {
                path: start.to_path_buf(),
            }),
        EntryKind::Other => Err(BaseDirError::Unsupported {
            path: start.to_path_buf(),
        }),
    }
}

/// Describe `base_dir` relative to the `workspace` root
///
/// Returns the workspace's own name when both are the same directory, and
/// the full base path when it lies outside the workspace.
pub fn relative_label(base_dir: &Path, workspace: &Path) -> String {
    let Ok(rel) = base_dir.strip_prefix(workspace) else {
        return base_dir.display().to_string();
    };
    let root = workspace
        .file_name()
        .map_or_else(|| workspace.to_path_buf(), PathBuf::from);
    if rel.as_os_str().is_empty() {
        root.display().to_string()
    } else {
        root.join(rel).display().to_string()
    }
}
