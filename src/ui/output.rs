//! ui::output
//!
//! Terminal output for the CLI.
//!
//! # Design
//!
//! Descriptor text and confirmations go to stdout. Diagnostics go to
//! stderr, prefixed with their severity the way a compiler reports them.
//! Only errors survive `--quiet`.

use std::fmt::Display;

use crate::engine::diagnostics::{Diagnostic, Severity};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Notes, warnings and confirmations
    Normal,
    /// Everything, plus `[debug]` lines
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. `--quiet` wins over `--debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        match (quiet, debug) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Debug,
            (false, false) => Verbosity::Normal,
        }
    }

    fn shows(self, severity: Severity) -> bool {
        severity == Severity::Error || self != Verbosity::Quiet
    }
}

/// Print a confirmation on stdout.
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

pub fn error(message: impl Display) {
    report(Severity::Error, message, Verbosity::Quiet);
}

pub fn warn(message: impl Display, verbosity: Verbosity) {
    report(Severity::Warning, message, verbosity);
}

pub fn note(message: impl Display, verbosity: Verbosity) {
    report(Severity::Note, message, verbosity);
}

/// Print a diagnostic under the prefix of its severity.
pub fn diagnostic(diagnostic: &Diagnostic, verbosity: Verbosity) {
    report(diagnostic.severity, diagnostic, verbosity);
}

fn report(severity: Severity, message: impl Display, verbosity: Verbosity) {
    if verbosity.shows(severity) {
        eprintln!("{}", prefixed(severity, message));
    }
}

/// `error: message`, `warning: message` or `note: message`.
pub fn prefixed(severity: Severity, message: impl Display) -> String {
    format!("{}: {}", severity, message)
}

/// One item per line, each behind `prefix`.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a diagnostic summary such as `2 errors, 1 warning`.
pub fn format_summary(errors: usize, warnings: usize) -> String {
    fn plural(count: usize, word: &str) -> String {
        if count == 1 {
            format!("{} {}", count, word)
        } else {
            format!("{} {}s", count, word)
        }
    }

    format!("{}, {}", plural(errors, "error"), plural(warnings, "warning"))
}
