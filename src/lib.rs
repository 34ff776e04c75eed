//! # copyr
//!
//! Predictable file and directory copying with `cp`-style overwrite policies.
//!
//! ## Core Features
//!
//! - **File or tree**: a single file is copied directly; directories are
//!   walked depth-first when recursion is enabled
//! - **Overwrite policy**: refuse by default, replace with `force`, or ask per
//!   file with `interactive` during directory copies
//! - **Streaming**: file contents are streamed, never loaded whole
//! - **Symlink aware**: symlinks and special files are never followed; inside a
//!   tree they are skipped with a warning
//! - **Interruptible**: a cancellation token is honored between entries and
//!   after every overwrite decision
//! - **Injectable I/O**: logging and prompting go through [`Logger`] and
//!   [`Confirm`], passed explicitly in a [`CopyContext`]
//!
//! ## Quick Start with Builder API
//!
//! ```no_run
//! use copyr::CopyBuilder;
//!
//! let stats = CopyBuilder::new("src", "dst").recursive().run()?;
//! println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
//! # Ok::<(), copyr::Error>(())
//! ```
//!
//! ## Function API
//!
//! ```no_run
//! use copyr::{ConsoleLogger, CopyContext, CopyOptions, StdinConfirm, copy};
//! use std::path::Path;
//!
//! let logger = ConsoleLogger::new(true);
//! let ctx = CopyContext::new(&logger, &StdinConfirm);
//! let options = CopyOptions::default().with_recursive().with_interactive();
//!
//! let stats = copy(Path::new("src"), Path::new("dst"), &options, &ctx)?;
//! println!("Copied {}, skipped {}", stats.files_copied, stats.files_skipped);
//! # Ok::<(), copyr::Error>(())
//! ```
//!
//! ## Overwrite Rules
//!
//! | Source | Destination file exists | Result |
//! |--------|-------------------------|--------|
//! | file | no `force` | [`Error::OverwriteRefused`] |
//! | file | `force` | replaced |
//! | entry in a directory | neither flag | skipped, walk continues |
//! | entry in a directory | `force` | replaced |
//! | entry in a directory | `interactive` | replaced if [`Confirm`] says yes |
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | [`TracingLogger`] forwarding to the tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod confirm;
mod context;
mod copy;
mod error;
mod logger;
mod options;


pub use builder::CopyBuilder;
pub use confirm::{Confirm, StdinConfirm, is_affirmative};
pub use context::CopyContext;
pub use copy::{CopyStats, EntryAction, copy, copy_directory_entry, copy_file};
pub use error::{Error, Result};
pub use logger::{ConsoleLogger, Logger};
pub use options::CopyOptions;

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use logger::TracingLogger;
