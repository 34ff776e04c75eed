//! Builder API for ergonomic copying operations.
//!
//! The builder pattern provides a fluent interface for configuring and executing
//! copy operations. This is often more convenient than manually constructing
//! [`CopyOptions`] and a [`CopyContext`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use copyr::CopyBuilder;
//!
//! // Copy a file, refusing to overwrite
//! let stats = CopyBuilder::new("notes.txt", "backup/").run()?;
//! println!("Copied {} bytes", stats.bytes_copied);
//! # Ok::<(), copyr::Error>(())
//! ```
//!
//! ## Directory With Logging
//!
//! ```no_run
//! use copyr::{ConsoleLogger, CopyBuilder};
//!
//! let logger = ConsoleLogger::new(true);
//! let stats = CopyBuilder::new("project", "backup")
//!     .recursive()
//!     .force()
//!     .logger(&logger)
//!     .run()?;
//! # Ok::<(), copyr::Error>(())
//! ```

use crate::confirm::Confirm;
use crate::context::CopyContext;
use crate::copy::{CopyStats, copy};
use crate::error::Result;
use crate::logger::Logger;
use crate::options::CopyOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// A builder for configuring and executing copy operations.
///
/// Without further configuration, warnings and errors go to stderr,
/// informational messages are dropped, and interactive prompts read stdin.
#[derive(Debug, Clone)]
pub struct CopyBuilder<'a> {
    src: PathBuf,
    dst: PathBuf,
    options: CopyOptions,
    ctx: CopyContext<'a>,
}

impl<'a> CopyBuilder<'a> {
    /// Create a new `CopyBuilder` with the given source and destination paths.
    ///
    /// Uses default options: no overwrite, no prompt, no directories.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Self {
        Self {
            src: src.as_ref().to_path_buf(),
            dst: dst.as_ref().to_path_buf(),
            options: CopyOptions::default(),
            ctx: CopyContext::default(),
        }
    }

    /// Allow the source to be a directory.
    #[must_use]
    pub fn recursive(mut self) -> Self {
        self.options.recursive = true;
        self
    }

    /// Overwrite existing files without asking.
    ///
    /// Turns off [`interactive`](Self::interactive).
    #[must_use]
    pub fn force(mut self) -> Self {
        self.options.force = true;
        self.options.interactive = false;
        self
    }

    /// Ask before overwriting files inside a copied directory.
    ///
    /// Turns off [`force`](Self::force).
    #[must_use]
    pub fn interactive(mut self) -> Self {
        self.options.interactive = true;
        self.options.force = false;
        self
    }

    /// Set a cancellation token for cooperative interruption.
    ///
    /// When the token is set to `true`, the copy stops before the next entry
    /// and returns [`Error::Interrupted`](crate::Error::Interrupted).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use copyr::CopyBuilder;
    /// use std::sync::Arc;
    /// use std::sync::atomic::AtomicBool;
    ///
    /// let cancel = Arc::new(AtomicBool::new(false));
    /// // Pass a clone to a signal handler
    /// let stats = CopyBuilder::new("src", "dst")
    ///     .recursive()
    ///     .cancel_token(cancel)
    ///     .run();
    /// ```
    #[must_use]
    pub fn cancel_token(mut self, token: Arc<AtomicBool>) -> Self {
        self.options = self.options.with_cancel_token(token);
        self
    }

    /// Report actions, warnings and errors to `logger`.
    #[must_use]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.ctx.logger = logger;
        self
    }

    /// Ask `confirm` before overwriting in interactive mode.
    #[must_use]
    pub fn confirm(mut self, confirm: &'a dyn Confirm) -> Self {
        self.ctx.confirm = confirm;
        self
    }

    /// Get a reference to the current options.
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Execute the copy operation.
    ///
    /// # Errors
    ///
    /// See [`copy`](crate::copy()).
    pub fn run(self) -> Result<CopyStats> {
        copy(&self.src, &self.dst, &self.options, &self.ctx)
    }
}
