//! Core copy operations.
//!
//! [`copy`] dispatches on the source type and walks directories;
//! [`copy_file`] and [`copy_directory_entry`] apply the overwrite policies
//! and move the bytes.

mod dir;
mod entry;
mod file;
mod utils;

// Re-export public API
pub use dir::{CopyStats, copy};
pub use entry::{EntryAction, copy_directory_entry};
pub use file::copy_file;
