//! Single file copy operations.
//!
//! This module provides [`copy_file`], the strict force-or-refuse policy used
//! when the source of a copy is a single regular file.

use crate::context::CopyContext;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

use super::utils::{base_name, copy_file_contents, same_file};

/// Copy a single regular file.
///
/// If `dst` is an existing directory the file is copied into it under its
/// own name. An existing destination file is only replaced when `force` is
/// set; there is no prompt on this path.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file or directory path
/// * `force` - Overwrite an existing destination file
/// * `ctx` - Logger and prompt
///
/// # Returns
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns an error if:
/// - Source is not a regular file ([`Error::UnsupportedFileType`])
/// - Destination is the source itself ([`Error::SameFile`])
/// - Destination file exists and `force` is false ([`Error::OverwriteRefused`])
/// - Reading or writing fails ([`Error::CopyContents`])
///
/// # Example
///
/// ```no_run
/// use copyr::{CopyContext, copy_file};
/// use std::path::Path;
///
/// let bytes = copy_file(Path::new("a.txt"), Path::new("backup/"), false, &CopyContext::default())?;
/// println!("copied {bytes} bytes");
/// # Ok::<(), copyr::Error>(())
/// ```
pub fn copy_file(src: &Path, dst: &Path, force: bool, ctx: &CopyContext<'_>) -> Result<u64> {
    match fs::symlink_metadata(src) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(Error::UnsupportedFileType(src.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::UnsupportedFileType(src.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    }

    let dst = if dst.is_dir() {
        dst.join(base_name(src)?)
    } else {
        dst.to_path_buf()
    };

    if dst.is_file() {
        if same_file(src, &dst)? {
            return Err(Error::SameFile(dst));
        }
        if !force {
            return Err(Error::OverwriteRefused(dst));
        }
    }

    ctx.logger
        .log(&format!("copy {} -> {}", src.display(), dst.display()));
    copy_file_contents(src, &dst)
}

// =============================================================================
// Tests
// =============================================================================
