//! Error types for mkpath
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Path parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is empty after trimming whitespace
    #[error("No path has been provided")]
    InvalidInput,

    /// A `..` component climbs above the base directory
    #[error("'{input}' points outside of the base directory")]
    EscapesBase { input: String },
}

/// Reasons a user-entered path is refused before anything is created
///
/// The `Display` text is the message shown inline to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Input uses absolute or drive-letter syntax
    #[error("'{input}' must not be absolute.")]
    AbsolutePath { input: String },

    /// Input resolves to a location above the base directory
    #[error("'{input}' points outside of {base}.")]
    OutsideBase { input: String, base: PathBuf },

    /// Resolved target is already present on disk
    #[error("{path} already exists.")]
    AlreadyExists { path: PathBuf },

    /// Resolved target contains characters or names no platform accepts
    #[error("{path} is not a valid path.")]
    InvalidSyntax { path: PathBuf },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create file
    #[error("Failed to create file '{path}': {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read entry metadata
    #[error("Failed to stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FilesystemError {
    /// Underlying I/O error
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            Self::CreateDir { source, .. }
            | Self::CreateFile { source, .. }
            | Self::Stat { source, .. } => source,
        }
    }

    /// Whether the operation failed because the entry is already there
    pub fn is_already_exists(&self) -> bool {
        self.io_error().kind() == std::io::ErrorKind::AlreadyExists
    }

    /// Whether the operation failed because the entry is missing
    pub fn is_not_found(&self) -> bool {
        self.io_error().kind() == std::io::ErrorKind::NotFound
    }
}

/// Hierarchy and file creation errors
#[derive(Error, Debug)]
pub enum CreateError {
    /// Input could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Hierarchy creation was invoked with nothing to create
    #[error("No directories found in parsed path")]
    EmptySegments,

    /// Trailing file target is already taken
    #[error("{path} already exists")]
    FileAlreadyExists { path: PathBuf },

    /// A directory in the hierarchy could not be created
    #[error("Failed to create segment '{segment}' of the hierarchy: {source}")]
    Segment {
        segment: String,
        path: PathBuf,
        source: FilesystemError,
    },

    /// The trailing file could not be created
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Base directory resolution errors
#[derive(Error, Debug)]
pub enum BaseDirError {
    /// Starting path does not exist
    #[error("Base path not found: {path}")]
    NotFound { path: PathBuf },

    /// Starting path is neither a file nor a directory
    #[error("Base path is not a file or directory: {path}")]
    Unsupported { path: PathBuf },

    /// A file was given but it has no parent directory
    #[error("File has no containing directory: {path}")]
    NoParent { path: PathBuf },

    /// Metadata lookup failed
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Global configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: PathBuf, error: String },
}

/// Top-level mkpath error type
#[derive(Error, Debug)]
pub enum MkpathError {
    /// Validation refused the input
    #[error("{0}")]
    Rejected(#[from] Rejection),

    /// Creation error
    #[error("Create error: {0}")]
    Create(#[from] CreateError),

    /// Base directory error
    #[error("Base directory error: {0}")]
    BaseDir(#[from] BaseDirError),

    /// Config error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
