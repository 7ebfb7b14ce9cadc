//! Error types shared by every stage of a sorting run.

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of an [`OrganizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The target folder is missing or is not a directory.
    NotFound,
    /// Reading, moving, creating or removing something on disk failed.
    Io,
    /// Two files would end up with the same destination name.
    Collision,
    /// An archive could not be extracted.
    Extraction,
}

/// Errors that can occur while sorting a directory.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The folder to sort does not exist.
    #[error("Folder with path {} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is not a directory.
    #[error("Path {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Walking the directory tree failed.
    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Failed to create a category or extraction directory.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to move a file into its category directory.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// The destination name is already taken and the policy forbids resolving it.
    #[error(
        "Cannot move {} to {}: destination already exists",
        file.display(),
        destination.display()
    )]
    NameCollision { file: PathBuf, destination: PathBuf },

    /// The archive extension has no known extraction format.
    #[error("Unsupported archive format '{extension}' for {}", archive.display())]
    UnsupportedArchive { archive: PathBuf, extension: String },

    /// The archive is corrupt or could not be unpacked.
    #[error("Failed to extract {}: {reason}", archive.display())]
    Extraction { archive: PathBuf, reason: String },

    /// Failed to remove a directory left empty by the reorganization.
    #[error("Failed to remove empty directory {}: {source}", path.display())]
    PruneFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    ReportWrite(#[from] std::io::Error),

    /// Serializing the JSON report failed.
    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),
}

impl OrganizeError {
    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::NotADirectory { .. } => ErrorKind::NotFound,
            Self::NameCollision { .. } => ErrorKind::Collision,
            Self::UnsupportedArchive { .. } | Self::Extraction { .. } => ErrorKind::Extraction,
            Self::Scan { .. }
            | Self::DirectoryCreationFailed { .. }
            | Self::FileMoveFailure { .. }
            | Self::PruneFailed { .. }
            | Self::ReportWrite(_)
            | Self::ReportSerialize(_) => ErrorKind::Io,
        }
    }
}

/// Result type for sorting operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;
