//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Results go to stdout; diagnostics go to stderr. Verbose and debug
//! detail is emitted through `tracing`, whose subscriber is installed once
//! the global flags are frozen (see [`init_logging`]).

use std::fmt::Display;

use tracing_subscriber::EnvFilter;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Normal mode - results and warnings
    Normal,
    /// Verbose mode - more output than normal
    Verbose,
    /// Debug mode - the most output available
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. Debug wins over verbose.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// Default `tracing` filter directive for this level.
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the flag-derived level. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity == Verbosity::Debug)
        .without_time()
        .try_init();
}

/// Print a result line to stdout.
pub fn print(message: impl Display) {
    println!("{}", message);
}

/// Print detail shown only in verbose or debug mode.
pub fn detail(message: impl Display, verbosity: Verbosity) {
    if verbosity >= Verbosity::Verbose {
        eprintln!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (always shown).
pub fn warn(message: impl Display) {
    eprintln!("warning: {}", message);
}

/// Format key/value pairs as aligned lines.
pub fn format_fields(fields: &[(&str, String)]) -> String {
    let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    fields
        .iter()
        .map(|(key, value)| format!("{:<width$}  {}", key, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
