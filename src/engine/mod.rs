//! engine
//!
//! Turns declarations into descriptors.
//!
//! # Architecture
//!
//! ```text
//! DeclarationSet -> Generator -> MetadataProcessor (per platform) -> descriptor
//! ```
//!
//! - [`generator`] loads base descriptors, assigns plugin classes to
//!   platforms and finishes every platform
//! - [`processor`] merges and validates one plugin class for one platform
//! - [`diagnostics`] collects notes, warnings and errors tied to the
//!   declaration they came from
//!
//! # Invariants
//!
//! - The two platforms share no mutable state; a failure on one does not
//!   affect the other
//! - Validation problems are diagnostics, never panics or early returns
//!   from the pass
//! - Only unreadable base descriptors abort a pass

pub mod diagnostics;
pub mod generator;
pub mod processor;

pub use diagnostics::{Diagnostic, Diagnostics, ErrorKind, Severity};
pub use generator::{GenerateError, GenerateReport, Generator};
pub use processor::{FinishOutcome, MetadataProcessor};
