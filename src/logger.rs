//! Logging sink for copy operations.
//!
//! The core never prints directly. Every operation receives a [`Logger`]
//! through [`CopyContext`](crate::CopyContext) and reports through it:
//!
//! | Method | Purpose | [`ConsoleLogger`] output |
//! |--------|---------|--------------------------|
//! | [`Logger::log`] | Per-file actions | stdout, verbose mode only |
//! | [`Logger::warn`] | Non-fatal problems | stderr, `Warning: ` prefix |
//! | [`Logger::error`] | Fatal problems | stderr, `Error: ` prefix |

/// A sink for progress messages, warnings and errors.
pub trait Logger {
    /// Informational message about an action being performed.
    fn log(&self, message: &str);

    /// Non-fatal problem; the operation continues.
    fn warn(&self, message: &str);

    /// Fatal problem.
    fn error(&self, message: &str);
}

/// Logger writing to the process's standard streams.
///
/// Informational messages are only printed when `verbose` is set; warnings
/// and errors are always printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    verbose: bool,
}

impl ConsoleLogger {
    /// Create a logger with the given verbosity.
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Logger that only reports warnings and errors.
    pub const fn quiet() -> Self {
        Self::new(false)
    }

    /// Whether informational messages are printed.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        if self.verbose {
            println!("{message}");
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("Warning: {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}

/// Logger forwarding to the `tracing` ecosystem (requires `tracing` feature).
///
/// Informational messages become `INFO` events; filtering is left to the
/// installed subscriber.
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
