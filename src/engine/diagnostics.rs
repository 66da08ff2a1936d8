//! engine::diagnostics
//!
//! Messages produced while generating descriptors.
//!
//! # Architecture
//!
//! Validation problems are collected, not thrown. Each [`Diagnostic`]
//! carries:
//! - Severity (`Note`, `Warning`, `Error`)
//! - For errors, an [`ErrorKind`] from the failure taxonomy
//! - The originating element (qualified class name), when there is one
//! - The declaration field the message is about (`name`,
//!   `dependencies.name`, `spigot.authors`, ...)
//!
//! A run that collected any error is reported as failed, even though every
//! platform was still finished.
//!
//! # Example
//!
//! ```
//! use plugmeta::engine::diagnostics::{Diagnostics, ErrorKind, Severity};
//!
//! let mut diagnostics = Diagnostics::new();
//! diagnostics.warning("Missing plugin version.").at("org.example.Example");
//! assert!(!diagnostics.has_errors());
//!
//! diagnostics
//!     .error(ErrorKind::MissingField, "Plugin name cannot be empty")
//!     .at("org.example.Example")
//!     .field("name");
//! assert!(diagnostics.has_errors());
//! assert_eq!(diagnostics.count(Severity::Warning), 1);
//! ```

use std::fmt;

use crate::core::metadata::MetadataError;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Informational; no action needed.
    Note,
    /// Something is probably missing but output is still produced.
    Warning,
    /// The run fails.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What went wrong, for error diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field is absent. Stops processing of that class.
    MissingField,
    /// The plugin name does not match the name pattern. Stops processing
    /// of that class.
    InvalidFormat,
    /// A name is declared twice.
    DuplicateKey,
    /// An empty string where a value is required. The item is skipped.
    EmptyValue,
    /// Reading or writing a descriptor failed.
    IoFailure,
    /// The declared classes cannot be assigned to platforms.
    InvalidDeclaration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MissingField => "missing-field",
            ErrorKind::InvalidFormat => "invalid-format",
            ErrorKind::DuplicateKey => "duplicate-key",
            ErrorKind::EmptyValue => "empty-value",
            ErrorKind::IoFailure => "io-failure",
            ErrorKind::InvalidDeclaration => "invalid-declaration",
        };
        f.write_str(name)
    }
}

impl From<&MetadataError> for ErrorKind {
    fn from(err: &MetadataError) -> Self {
        match err {
            MetadataError::EmptyValue { .. } => ErrorKind::EmptyValue,
            MetadataError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
        }
    }
}

/// A single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: Option<ErrorKind>,
    pub message: String,
    pub element: Option<String>,
    pub field: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind: None,
            message: message.into(),
            element: None,
            field: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            write!(f, "{}", element)?;
            if let Some(field) = &self.field {
                write!(f, " ({})", field)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{}", self.message)?;
        if let Some(kind) = self.kind {
            write!(f, " [{}]", kind)?;
        }
        Ok(())
    }
}

/// Builder returned by [`Diagnostics`] to attach location details.
pub struct DiagnosticBuilder<'a> {
    diagnostic: &'a mut Diagnostic,
}

impl DiagnosticBuilder<'_> {
    /// Attach the originating element.
    pub fn at(self, element: impl Into<String>) -> Self {
        self.diagnostic.element = Some(element.into());
        self
    }

    /// Attach the declaration field path.
    pub fn field(self, field: impl Into<String>) -> Self {
        self.diagnostic.field = Some(field.into());
        self
    }
}

/// Ordered collection of diagnostics for one run.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, returning a builder for its location.
    pub fn push(&mut self, diagnostic: Diagnostic) -> DiagnosticBuilder<'_> {
        match diagnostic.severity {
            Severity::Note => tracing::info!(message = %diagnostic.message, "note"),
            Severity::Warning => tracing::debug!(message = %diagnostic.message, "warning"),
            Severity::Error => tracing::debug!(message = %diagnostic.message, "error"),
        }

        self.entries.push(diagnostic);
        let last = self.entries.len() - 1;
        DiagnosticBuilder {
            diagnostic: &mut self.entries[last],
        }
    }

    pub fn note(&mut self, message: impl Into<String>) -> DiagnosticBuilder<'_> {
        self.push(Diagnostic::new(Severity::Note, message))
    }

    pub fn warning(&mut self, message: impl Into<String>) -> DiagnosticBuilder<'_> {
        self.push(Diagnostic::new(Severity::Warning, message))
    }

    pub fn error(&mut self, kind: ErrorKind, message: impl Into<String>) -> DiagnosticBuilder<'_> {
        let mut diagnostic = Diagnostic::new(Severity::Error, message);
        diagnostic.kind = Some(kind);
        self.push(diagnostic)
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Errors of the given kind.
    pub fn errors_of(&self, kind: ErrorKind) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.entries.iter().filter(move |d| d.kind == Some(kind))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Append all diagnostics of `other`.
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
