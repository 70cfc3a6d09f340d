//! Hierarchy creation
//!
//! Walks a parsed segment list creating each missing directory root to leaf,
//! then optionally creates the trailing empty file.
//!
//! Directory creation is idempotent: existing directories are skipped, and a
//! directory that appears between the existence check and the create call is
//! tolerated. Any other entry in a segment's place is a failure. The first
//! failure stops the walk; directories created before it are left in place.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::parser::{parse_path, ParsedPath};
use crate::error::{CreateError, FilesystemError};
use crate::infra::filesystem::{self, EntryKind};

/// Create every missing directory of `segments` below `base_dir`
///
/// # Returns
///
/// * `Ok(PathBuf)` - the deepest directory of the hierarchy
/// * `Err(CreateError::EmptySegments)` - nothing to create
/// * `Err(CreateError::Segment)` - the first segment that could not be created
pub async fn create_hierarchy(base_dir: &Path, segments: &[String]) -> Result<PathBuf, CreateError> {
    if segments.is_empty() {
        return Err(CreateError::EmptySegments);
    }

    let mut current = base_dir.to_path_buf();
    for segment in segments {
        current.push(segment);

        match filesystem::stat_entry(&current).await {
            Ok(EntryKind::Directory) => {
                debug!(path = %current.display(), "Directory already exists");
                continue;
            }
            Ok(_) => {
                let source = FilesystemError::CreateDir {
                    path: current.clone(),
                    source: io::Error::new(io::ErrorKind::AlreadyExists, "entry exists and is not a directory"),
                };
                return Err(CreateError::Segment {
                    segment: segment.clone(),
                    path: current,
                    source,
                });
            }
            Err(e) if e.is_not_found() => {}
            Err(source) => {
                return Err(CreateError::Segment {
                    segment: segment.clone(),
                    path: current,
                    source,
                });
            }
        }

        match filesystem::create_directory(&current).await {
            Ok(()) => debug!(path = %current.display(), "Created directory"),
            Err(source) => {
                let raced = source.is_already_exists()
                    && matches!(
                        filesystem::stat_entry(&current).await,
                        Ok(EntryKind::Directory)
                    );
                if !raced {
                    return Err(CreateError::Segment {
                        segment: segment.clone(),
                        path: current,
                        source,
                    });
                }
                warn!(path = %current.display(), "Directory appeared while creating it");
            }
        }
    }

    Ok(current)
}

/// Create an empty file at `path`
///
/// Fails with `CreateError::FileAlreadyExists` when a file or directory is
/// already there, including one that shows up after the existence check.
pub async fn create_trailing_file(path: &Path) -> Result<PathBuf, CreateError> {
    if filesystem::path_exists(path).await {
        return Err(CreateError::FileAlreadyExists {
            path: path.to_path_buf(),
        });
    }

    match filesystem::create_empty_file(path).await {
        Ok(()) => {
            info!(path = %path.display(), "Created file");
            Ok(path.to_path_buf())
        }
        Err(e) if e.is_already_exists() => Err(CreateError::FileAlreadyExists {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Parse `raw_input` and create what it describes below `base_dir`
///
/// # Returns
///
/// * `Ok(Some(path))` - the absolute path of the created file
/// * `Ok(None)` - only directories were requested (or nothing at all)
pub async fn create_path(base_dir: &Path, raw_input: &str) -> Result<Option<PathBuf>, CreateError> {
    let parsed = parse_path(base_dir, raw_input)?;
    create_parsed(base_dir, &parsed).await
}

/// Create what an already parsed path describes below `base_dir`
///
/// Same results as [`create_path`].
pub async fn create_parsed(base_dir: &Path, parsed: &ParsedPath) -> Result<Option<PathBuf>, CreateError> {
    if parsed.is_empty() {
        debug!(base = %base_dir.display(), "Nothing to create");
        return Ok(None);
    }

    if !parsed.segments().is_empty() {
        create_hierarchy(base_dir, parsed.segments()).await?;
    }

    if parsed.has_trailing_file() {
        let file = create_trailing_file(parsed.target()).await?;
        return Ok(Some(file));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use tempfile::TempDir;

    fn segments(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_create_hierarchy_creates_in_order() {
        let temp = TempDir::new().unwrap();

        let deepest = create_hierarchy(temp.path(), &segments(&["a", "b", "c"]))
            .await
            .unwrap();

        assert_eq!(deepest, temp.path().join("a").join("b").join("c"));
        assert!(temp.path().join("a").is_dir());
        assert!(temp.path().join("a/b").is_dir());
        assert!(deepest.is_dir());
    }

    #[tokio::test]
    async fn test_create_hierarchy_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dirs = segments(&["a", "b", "c"]);

        let first = create_hierarchy(temp.path(), &dirs).await.unwrap();
        std::fs::write(first.join("keep.txt"), "data").unwrap();
        let second = create_hierarchy(temp.path(), &dirs).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            std::fs::read_to_string(second.join("keep.txt")).unwrap(),
            "data"
        );
    }

    #[tokio::test]
    async fn test_create_hierarchy_rejects_empty_segments() {
        let temp = TempDir::new().unwrap();

        let err = create_hierarchy(temp.path(), &[]).await.unwrap_err();
        assert!(matches!(err, CreateError::EmptySegments));
    }

    #[tokio::test]
    async fn test_create_hierarchy_stops_at_first_failure() {
        let temp = TempDir::new().unwrap();
        // A file where a directory is expected blocks the rest of the walk
        std::fs::create_dir(temp.path().join("a")).unwrap();
        std::fs::write(temp.path().join("a/b"), "").unwrap();

        let err = create_hierarchy(temp.path(), &segments(&["a", "b", "c"]))
            .await
            .unwrap_err();

        match err {
            CreateError::Segment { segment, path, source } => {
                assert_eq!(segment, "b");
                assert_eq!(path, temp.path().join("a/b"));
                assert!(source.is_already_exists());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(temp.path().join("a/b").is_file());
    }

    #[tokio::test]
    async fn test_create_path_leaf_blocked_by_file() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("x")).unwrap();
        std::fs::write(temp.path().join("x/y"), "").unwrap();

        let err = create_path(temp.path(), "x/y/").await.unwrap_err();

        match err {
            CreateError::Segment { segment, path, .. } => {
                assert_eq!(segment, "y");
                assert_eq!(path, temp.path().join("x/y"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!temp.path().join("x/y").is_dir());
    }

    #[tokio::test]
    async fn test_create_parsed_uses_parsed_segments() {
        let temp = TempDir::new().unwrap();
        let parsed = parse_path(temp.path(), "docs\\guide/intro.md").unwrap();

        let created = create_parsed(temp.path(), &parsed).await.unwrap();

        assert_eq!(created.as_deref(), Some(parsed.target()));
        assert!(temp.path().join("docs/guide").is_dir());
    }

    #[tokio::test]
    async fn test_create_trailing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("new.txt");

        let created = create_trailing_file(&file).await.unwrap();

        assert_eq!(created, file);
        assert!(file.is_file());
    }

    #[tokio::test]
    async fn test_create_trailing_file_refuses_existing_entries() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("taken.txt");
        std::fs::write(&file, "content").unwrap();
        let dir = temp.path().join("taken-dir");
        std::fs::create_dir(&dir).unwrap();

        let err = create_trailing_file(&file).await.unwrap_err();
        assert!(matches!(err, CreateError::FileAlreadyExists { .. }));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "content");

        let err = create_trailing_file(&dir).await.unwrap_err();
        assert!(matches!(err, CreateError::FileAlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_create_path_with_file() {
        let temp = TempDir::new().unwrap();

        let created = create_path(temp.path(), "a/b/c/file.txt").await.unwrap();

        let expected = temp.path().join("a").join("b").join("c").join("file.txt");
        assert_eq!(created, Some(expected.clone()));
        assert!(temp.path().join("a").is_dir());
        assert!(temp.path().join("a/b").is_dir());
        assert!(temp.path().join("a/b/c").is_dir());
        assert!(expected.is_file());
    }

    #[tokio::test]
    async fn test_create_path_directories_only() {
        let temp = TempDir::new().unwrap();

        let created = create_path(temp.path(), "x/y/").await.unwrap();

        assert_eq!(created, None);
        assert!(temp.path().join("x").is_dir());
        assert!(temp.path().join("x/y").is_dir());
    }

    #[tokio::test]
    async fn test_create_path_single_file() {
        let temp = TempDir::new().unwrap();

        let created = create_path(temp.path(), "notes.md").await.unwrap();

        assert_eq!(created, Some(temp.path().join("notes.md")));
    }

    #[tokio::test]
    async fn test_create_path_mixed_separators() {
        let temp = TempDir::new().unwrap();

        create_path(temp.path(), "a\\b/c\\").await.unwrap();

        assert!(temp.path().join("a/b/c").is_dir());
    }

    #[tokio::test]
    async fn test_create_path_only_separators_is_noop() {
        let temp = TempDir::new().unwrap();

        let created = create_path(temp.path(), "//").await.unwrap();

        assert_eq!(created, None);
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_create_path_empty_input() {
        let temp = TempDir::new().unwrap();

        let err = create_path(temp.path(), "   ").await.unwrap_err();
        assert!(matches!(err, CreateError::Parse(ParseError::InvalidInput)));
    }

    #[tokio::test]
    async fn test_create_path_existing_file_fails_but_keeps_directories() {
        let temp = TempDir::new().unwrap();
        create_path(temp.path(), "a/b/file.txt").await.unwrap();

        let err = create_path(temp.path(), "a/b/file.txt").await.unwrap_err();

        assert!(matches!(err, CreateError::FileAlreadyExists { .. }));
        assert!(temp.path().join("a/b").is_dir());
    }
}
