//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`] for configuring how existing
//! destination files and source directories are handled.
//!
//! # Example
//!
//! ```
//! use copyr::CopyOptions;
//!
//! let options = CopyOptions::default()
//!     .with_recursive()
//!     .with_force();
//! assert!(options.force && options.recursive);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Options for copy operations.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `force` | `false` | Refuse to overwrite existing files |
/// | `interactive` | `false` | Never prompt |
/// | `recursive` | `false` | Refuse directory sources |
/// | `cancel_token` | `None` | Not interruptible |
///
/// `force` and `interactive` are expected to be mutually exclusive. When both
/// are set, directory traversal consults the prompt first.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyOptions {
    /// Overwrite existing destination files without asking
    pub force: bool,

    /// Ask before overwriting each existing file found while copying a directory
    ///
    /// Has no effect when the source is a single file.
    pub interactive: bool,

    /// Allow directory sources to be copied
    pub recursive: bool,

    /// Cooperative interruption flag
    ///
    /// Checked between entries; when set, the copy stops and returns
    /// [`Error::Interrupted`](crate::Error::Interrupted).
    #[cfg_attr(feature = "serde", serde(skip))]
    pub cancel_token: Option<Arc<AtomicBool>>,
}

impl CopyOptions {
    /// Overwrite existing files without prompting
    #[must_use]
    pub fn with_force(mut self) -> Self {
        self.force = true;
        self
    }

    /// Prompt before overwriting files during directory copies
    #[must_use]
    pub fn with_interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Allow copying directories
    #[must_use]
    pub fn with_recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Set a cancellation token
    #[must_use]
    pub fn with_cancel_token(mut self, token: Arc<AtomicBool>) -> Self {
        self.cancel_token = Some(token);
        self
    }

    /// Whether the cancellation token has been triggered
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token
            .as_ref()
            .is_some_and(|token| token.load(Ordering::Relaxed))
    }
}
