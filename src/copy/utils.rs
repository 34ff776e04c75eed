//! Utility functions for file copy operations.
//!
//! This module contains helpers shared by the file, entry and directory
//! copy operations: streaming content transfer, idempotent directory
//! creation and destination naming.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

// =============================================================================
// File content copying
// =============================================================================

/// Stream `src` into `dst`, creating or truncating `dst`.
///
/// Both handles are dropped before returning, on success and on error.
pub(crate) fn copy_file_contents(src: &Path, dst: &Path) -> Result<u64> {
    stream(src, dst).map_err(|source| Error::CopyContents {
        src: src.to_path_buf(),
        dest: dst.to_path_buf(),
        source,
    })
}

fn stream(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut reader = BufReader::new(File::open(src)?);
    let mut writer = BufWriter::new(File::create(dst)?);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}

// =============================================================================
// Directory utilities
// =============================================================================

/// Create `path` as a directory unless one already exists.
///
/// The parent must exist. Returns `true` if the directory was created.
/// An existing non-directory at `path` is reported as
/// [`Error::DestinationNotDirectory`].
pub(crate) fn ensure_dir(path: &Path) -> Result<bool> {
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(false)
            } else {
                Err(Error::DestinationNotDirectory(path.to_path_buf()))
            }
        }
        Err(source) => Err(Error::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// =============================================================================
// Path utilities
// =============================================================================

/// Name a copy of `src` gets when placed inside an existing directory.
///
/// Paths like `.` or `dir/..` have no final component, so the canonical
/// path is consulted. A filesystem root has no name at all.
pub(crate) fn base_name(src: &Path) -> Result<OsString> {
    if let Some(name) = src.file_name() {
        return Ok(name.to_os_string());
    }
    let canonical = src.canonicalize()?;
    canonical
        .file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| Error::NoFileName(src.to_path_buf()))
}

/// Whether `dest` is `src` or a descendant of it.
///
/// `dest` may not exist yet; its nearest existing ancestor is resolved and
/// the remaining components are appended.
pub(crate) fn is_within(dest: &Path, src: &Path) -> io::Result<bool> {
    let src = src.canonicalize()?;

    let mut existing = dest;
    let mut missing = Vec::new();
    let resolved = loop {
        match existing.canonicalize() {
            Ok(path) => break path,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let (Some(parent), Some(name)) = (existing.parent(), existing.file_name()) else {
                    return Ok(false);
                };
                missing.push(name);
                existing = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
            Err(e) => return Err(e),
        }
    };

    let full = missing
        .iter()
        .rev()
        .fold(resolved, |acc, name| acc.join(name));
    Ok(full.starts_with(&src))
}

/// Whether `a` and `b` name the same existing file.
///
/// Symlinks are followed and hard links compare equal on Unix.
pub(crate) fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        let (a, b) = (fs::metadata(a)?, fs::metadata(b)?);
        Ok(a.dev() == b.dev() && a.ino() == b.ino())
    }

    #[cfg(not(unix))]
    {
        Ok(a.canonicalize()? == b.canonicalize()?)
    }
}
