//! Per-entry handling during a directory copy.
//!
//! Unlike [`copy_file`](super::copy_file), an existing destination file is
//! not an error here: it is replaced when forced or confirmed, and skipped
//! otherwise.

use crate::context::CopyContext;
use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::fs;
use std::path::Path;

use super::utils::{copy_file_contents, same_file};

/// What happened to a single directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// Entry is a directory; the caller creates it and descends
    Recurse,
    /// Entry was a regular file and its bytes were copied
    Copied {
        /// Number of bytes copied
        bytes: u64,
    },
    /// Destination file exists and overwriting was not allowed
    Skipped,
    /// Entry is neither a regular file nor a directory
    Unsupported,
}

/// Handle one child of a directory being copied.
///
/// Symlinks are not followed: a symlink, device, socket or FIFO yields
/// [`EntryAction::Unsupported`] after a warning.
///
/// When `dest_child` already exists as a file, `options.interactive` asks
/// `ctx.confirm`; otherwise `options.force` decides.
///
/// # Errors
///
/// Returns an error if the source entry cannot be inspected or its contents
/// cannot be copied, or if the destination is the source itself
/// ([`Error::SameFile`]). A cancellation noticed after the overwrite decision
/// yields [`Error::Interrupted`] with zero counts; [`copy`](crate::copy())
/// fills in the totals.
pub fn copy_directory_entry(
    src_child: &Path,
    dest_child: &Path,
    options: &CopyOptions,
    ctx: &CopyContext<'_>,
) -> Result<EntryAction> {
    let file_type = fs::symlink_metadata(src_child)?.file_type();

    if file_type.is_dir() {
        return Ok(EntryAction::Recurse);
    }

    if !file_type.is_file() {
        ctx.logger.warn(&format!(
            "skipping {} because its file type is not supported",
            src_child.display()
        ));
        return Ok(EntryAction::Unsupported);
    }

    let confirmed = if !dest_child.is_file() {
        true
    } else if same_file(src_child, dest_child)? {
        return Err(Error::SameFile(dest_child.to_path_buf()));
    } else if options.interactive {
        ctx.confirm.confirm(dest_child)
    } else {
        options.force
    };

    // Ctrl-C while the prompt was waiting must not turn into an overwrite
    if options.is_cancelled() {
        return Err(Error::Interrupted {
            files_copied: 0,
            bytes_copied: 0,
        });
    }

    if !confirmed {
        ctx.logger.log(&format!(
            "skipping {} -> {}",
            src_child.display(),
            dest_child.display()
        ));
        return Ok(EntryAction::Skipped);
    }

    ctx.logger.log(&format!(
        "copy file {} -> {}",
        src_child.display(),
        dest_child.display()
    ));
    let bytes = copy_file_contents(src_child, dest_child)?;
    Ok(EntryAction::Copied { bytes })
}
