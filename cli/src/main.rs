//! copyr - copy files and directories
//!
//! A small `cp` work-alike powered by the copyr library.

use clap::Parser;
use copyr::{ConsoleLogger, CopyBuilder, CopyStats, Logger, StdinConfirm};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// copyr - copy files and directories
///
/// Copies SOURCE to DESTINATION. Existing files are never overwritten unless
/// -f is given; inside a copied directory, -i asks before each overwrite.
///
/// Usage:
///   copyr SOURCE DEST
///   copyr -r SOURCE_DIR DEST
#[derive(Parser, Debug)]
#[command(name = "copyr", version, about, long_about = None)]
struct Args {
    /// Source file or directory
    source: PathBuf,

    /// Destination file or directory
    destination: PathBuf,

    /// Explain what is being done
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Prompt before overwriting files while copying a directory
    #[arg(short = 'i', long, conflicts_with = "force")]
    interactive: bool,

    /// Overwrite existing files without prompting
    #[arg(short = 'f', long)]
    force: bool,

    /// Copy directories recursively
    #[arg(short = 'r', long)]
    recursive: bool,
}

fn main() {
    let args = Args::parse();
    let logger = ConsoleLogger::new(args.verbose);

    match run(&args, &logger) {
        Ok(stats) => logger.log(&summary(&stats)),
        Err(error) if error.is_interrupted() => {
            // plain notice, not an error
            eprintln!("\nInterrupted");
        }
        Err(error) => {
            logger.error(&error.to_string());
            std::process::exit(1);
        }
    }
}

fn run(args: &Args, logger: &ConsoleLogger) -> copyr::Result<CopyStats> {
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel_clone = cancel.clone();
        ctrlc::set_handler(move || {
            // The walk stops at the next entry; a second interrupt means the
            // process is stuck (e.g. waiting on a prompt), so leave now.
            if cancel_clone.swap(true, Ordering::Relaxed) {
                eprintln!("\nInterrupted");
                std::process::exit(0);
            }
        })
        .ok();
    }

    let mut builder = CopyBuilder::new(&args.source, &args.destination)
        .cancel_token(cancel)
        .logger(logger)
        .confirm(&StdinConfirm);

    if args.recursive {
        builder = builder.recursive();
    }
    if args.force {
        builder = builder.force();
    }
    if args.interactive {
        builder = builder.interactive();
    }

    builder.run()
}

fn summary(stats: &CopyStats) -> String {
    let noun = if stats.files_copied == 1 { "file" } else { "files" };
    let mut line = format!(
        "copied {} {} ({})",
        stats.files_copied,
        noun,
        format_bytes(stats.bytes_copied)
    );
    if stats.files_skipped > 0 {
        line.push_str(&format!(", skipped {}", stats.files_skipped));
    }
    if stats.unsupported_entries > 0 {
        line.push_str(&format!(", unsupported {}", stats.unsupported_entries));
    }
    line
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
