//! Overwrite confirmation.
//!
//! Interactive mode asks a [`Confirm`] implementation before replacing an
//! existing file during a directory copy. [`StdinConfirm`] asks the user on
//! the terminal; any `Fn(&Path) -> bool` closure can stand in for it.
//!
//! ```
//! use copyr::Confirm;
//! use std::path::Path;
//!
//! let always_yes = |_: &Path| true;
//! assert!(always_yes.confirm(Path::new("file.txt")));
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Decides whether an existing destination file may be overwritten.
pub trait Confirm {
    /// Return `true` to overwrite `dest`.
    fn confirm(&self, dest: &Path) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&Path) -> bool,
{
    fn confirm(&self, dest: &Path) -> bool {
        self(dest)
    }
}

/// Whether a prompt response counts as "yes".
///
/// The first non-whitespace character must be `y` or `Y`. Empty input
/// means no.
pub fn is_affirmative(response: &str) -> bool {
    response
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Prompts on stderr and reads the answer from stdin.
///
/// End of input or a read error counts as refusal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, dest: &Path) -> bool {
        prompt(&mut io::stdin().lock(), &mut io::stderr(), dest)
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, dest: &Path) -> bool {
    if write!(output, "overwrite '{}'? [y/N] ", dest.display())
        .and_then(|()| output.flush())
        .is_err()
    {
        return false;
    }

    let mut response = String::new();
    match input.read_line(&mut response) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_affirmative(&response),
    }
}
