//! Error types for copyr.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during copy operations, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Policy | [`Error::OverwriteRefused`], [`Error::RecursionRequired`] |
//! | Validation | [`Error::DestinationNotDirectory`], [`Error::UnsupportedFileType`], [`Error::NoFileName`], [`Error::CopyIntoSelf`], [`Error::SameFile`] |
//! | IO | [`Error::Io`], [`Error::CreateDir`], [`Error::CopyContents`] |
//! | Control | [`Error::Interrupted`] |

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for copyr operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during copy operations.
///
/// All errors include relevant path information where one exists.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Destination file exists and overwriting was neither forced nor confirmed
    #[error("Cannot overwrite existing file without force: {0}")]
    OverwriteRefused(PathBuf),

    /// Source is a directory but recursive copying was not requested
    #[error("Source is a directory, recursive copy not requested: {0}")]
    RecursionRequired(PathBuf),

    /// Source is a directory but the destination exists as something else
    #[error("Destination is not a directory: {0}")]
    DestinationNotDirectory(PathBuf),

    /// Source is missing, or is neither a regular file nor a directory
    #[error("File type not supported: {0}")]
    UnsupportedFileType(PathBuf),

    /// Source and destination are the same file
    #[error("Source and destination are the same file: {0}")]
    SameFile(PathBuf),

    /// Source path has no final component to name the copy after
    #[error("Source has no file name: {0}")]
    NoFileName(PathBuf),

    /// Destination directory is the source itself or lies inside it
    #[error("Cannot copy directory {src} into itself at {dest}")]
    CopyIntoSelf {
        /// Source directory
        src: PathBuf,
        /// Effective destination directory
        dest: PathBuf,
    },

    /// Failed to create a destination directory
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed while transferring file contents
    #[error("Failed to copy {src} to {dest}: {source}")]
    CopyContents {
        /// Source file
        src: PathBuf,
        /// Destination file
        dest: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Operation was interrupted via the cancellation token
    ///
    /// Files copied before the interruption are left in place.
    #[error("Interrupted ({files_copied} files copied, {bytes_copied} bytes)")]
    Interrupted {
        /// Number of files copied before the interruption
        files_copied: u64,
        /// Bytes copied before the interruption
        bytes_copied: u64,
    },
}

impl Error {
    /// Whether this error reports an interruption rather than a failure.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted { .. })
    }
}
