//! Top-level dispatch and directory copy operations.
//!
//! This module provides [`copy`], which decides between a single file copy
//! and a recursive directory walk, and [`CopyStats`] describing the result.

use crate::context::CopyContext;
use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use super::entry::{EntryAction, copy_directory_entry};
use super::file::copy_file;
use super::utils::{base_name, ensure_dir, is_within};

/// Statistics from a copy operation.
///
/// # Example
///
/// ```no_run
/// use copyr::{CopyContext, CopyOptions, copy};
/// use std::path::Path;
///
/// let options = CopyOptions::default().with_recursive();
/// let stats = copy(Path::new("src"), Path::new("dst"), &options, &CopyContext::default())?;
/// println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
/// println!("Skipped {} files", stats.files_skipped);
/// # Ok::<(), copyr::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied
    pub files_copied: u64,
    /// Number of files left alone because the destination already existed
    pub files_skipped: u64,
    /// Number of destination directories created
    pub dirs_created: u64,
    /// Number of entries skipped because of their file type
    pub unsupported_entries: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Duration of the copy operation
    pub duration: Duration,
}

/// Copy a file or a directory tree.
///
/// A regular file source goes through [`copy_file`] with `options.force`;
/// `options.interactive` only applies inside directory copies.
///
/// A directory source requires `options.recursive`. If `dst` is an existing
/// directory the tree is copied to `dst/<name of src>`, otherwise to `dst`
/// itself. Children are visited depth-first in the order the filesystem lists
/// them; entries of unsupported types are skipped with a warning. The first
/// other error aborts the walk, leaving already copied files in place.
///
/// # Errors
///
/// Returns an error if:
/// - Source is missing or not a file or directory ([`Error::UnsupportedFileType`])
/// - A file destination exists and `force` is false ([`Error::OverwriteRefused`])
/// - Source is a directory and `recursive` is false ([`Error::RecursionRequired`])
/// - Source is a directory and `dst` is not ([`Error::DestinationNotDirectory`])
/// - Destination lies inside the source directory ([`Error::CopyIntoSelf`])
/// - A file destination is the source itself ([`Error::SameFile`])
/// - The cancellation token was triggered ([`Error::Interrupted`])
/// - IO operations fail
pub fn copy(
    src: &Path,
    dst: &Path,
    options: &CopyOptions,
    ctx: &CopyContext<'_>,
) -> Result<CopyStats> {
    let start_time = Instant::now();
    let mut stats = CopyStats::default();

    check_cancelled(options, &stats)?;

    let file_type = match fs::symlink_metadata(src) {
        Ok(meta) => meta.file_type(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::UnsupportedFileType(src.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if file_type.is_file() {
        stats.bytes_copied = copy_file(src, dst, options.force, ctx)?;
        stats.files_copied = 1;
    } else if file_type.is_dir() {
        if !options.recursive {
            return Err(Error::RecursionRequired(src.to_path_buf()));
        }

        let dst = match fs::metadata(dst) {
            Ok(meta) if meta.is_dir() => dst.join(base_name(src)?),
            Ok(_) => return Err(Error::DestinationNotDirectory(dst.to_path_buf())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => dst.to_path_buf(),
            Err(e) => return Err(e.into()),
        };

        if is_within(&dst, src)? {
            return Err(Error::CopyIntoSelf {
                src: src.to_path_buf(),
                dest: dst,
            });
        }

        if ensure_dir(&dst)? {
            stats.dirs_created += 1;
        }
        copy_dir_contents(src, &dst, options, ctx, &mut stats)?;
    } else {
        return Err(Error::UnsupportedFileType(src.to_path_buf()));
    }

    // An interrupt that arrived during the last entry still ends the run
    check_cancelled(options, &stats)?;

    stats.duration = start_time.elapsed();
    Ok(stats)
}

/// Copy the children of `src` into the existing directory `dst`.
fn copy_dir_contents(
    src: &Path,
    dst: &Path,
    options: &CopyOptions,
    ctx: &CopyContext<'_>,
    stats: &mut CopyStats,
) -> Result<()> {
    for entry in fs::read_dir(src)? {
        check_cancelled(options, stats)?;

        let entry = entry?;
        let src_child = entry.path();
        let dst_child = dst.join(entry.file_name());

        let action = copy_directory_entry(&src_child, &dst_child, options, ctx)
            .map_err(|e| if e.is_interrupted() { interrupted(stats) } else { e })?;

        match action {
            EntryAction::Recurse => {
                ctx.logger.log(&format!(
                    "copy dir {} -> {}",
                    src_child.display(),
                    dst_child.display()
                ));
                if ensure_dir(&dst_child)? {
                    stats.dirs_created += 1;
                }
                copy_dir_contents(&src_child, &dst_child, options, ctx, stats)?;
            }
            EntryAction::Copied { bytes } => {
                stats.files_copied += 1;
                stats.bytes_copied += bytes;
            }
            EntryAction::Skipped => stats.files_skipped += 1,
            EntryAction::Unsupported => stats.unsupported_entries += 1,
        }
    }

    Ok(())
}

fn check_cancelled(options: &CopyOptions, stats: &CopyStats) -> Result<()> {
    if options.is_cancelled() {
        return Err(interrupted(stats));
    }
    Ok(())
}

fn interrupted(stats: &CopyStats) -> Error {
    Error::Interrupted {
        files_copied: stats.files_copied,
        bytes_copied: stats.bytes_copied,
    }
}

// =============================================================================
// Tests
// =============================================================================
