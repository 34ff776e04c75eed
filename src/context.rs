//! Collaborators shared by every copy operation.

use crate::confirm::{Confirm, StdinConfirm};
use crate::logger::{ConsoleLogger, Logger};

/// Logger and overwrite prompt, passed by reference through the traversal.
///
/// Build one at startup and hand it to [`copy`](crate::copy()); nothing in the
/// crate keeps global logging state.
#[derive(Clone, Copy)]
pub struct CopyContext<'a> {
    /// Sink for actions, warnings and errors
    pub logger: &'a dyn Logger,
    /// Asked before overwriting in interactive mode
    pub confirm: &'a dyn Confirm,
}

static QUIET: ConsoleLogger = ConsoleLogger::quiet();
static STDIN: StdinConfirm = StdinConfirm;

impl<'a> CopyContext<'a> {
    /// Create a context from a logger and a confirmation prompt.
    pub fn new(logger: &'a dyn Logger, confirm: &'a dyn Confirm) -> Self {
        Self { logger, confirm }
    }
}

impl Default for CopyContext<'static> {
    /// Quiet console logging and a stdin prompt.
    fn default() -> Self {
        Self::new(&QUIET, &STDIN)
    }
}

impl std::fmt::Debug for CopyContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyContext").finish_non_exhaustive()
    }
}
