//! core::descriptor
//!
//! Reading and writing plugin descriptor files (`plugin.yml`, `bungee.yml`).
//!
//! # Format
//!
//! Descriptors are YAML mappings. Written documents start with a one-line
//! comment header followed by a blank line; consumers comparing documents
//! strip everything up to the first blank line (see [`body`]). The body is
//! block style with two-space indentation and a fixed key order:
//!
//! `name, version, description, load, author|authors, website, main,
//! database, depend, softdepend, loadbefore, prefix, commands, permissions`
//!
//! Absent or empty values are omitted entirely. Encoding the same metadata
//! twice yields identical bodies.
//!
//! # Reading
//!
//! Reading is lenient: a document without a string `name` yields `None`,
//! unrecognized keys are ignored and values of the wrong type are skipped.
//!
//! # Example
//!
//! ```
//! use plugmeta::core::descriptor;
//! use plugmeta::core::metadata::PluginMetadata;
//!
//! let mut meta = PluginMetadata::new("example");
//! meta.set_main("org.example.Example").unwrap();
//! meta.add_author("Zartec").unwrap();
//!
//! let text = descriptor::encode(&meta).unwrap();
//! assert_eq!(text, "name: example\nauthor: Zartec\nmain: org.example.Example\n");
//!
//! let parsed = descriptor::parse_str(&text).unwrap().unwrap();
//! assert_eq!(parsed, meta);
//! ```

mod read;
mod write;

pub use read::{parse_str, read, read_path};
pub use write::{encode, header, write, write_path};

use std::path::PathBuf;

use thiserror::Error;

/// Descriptor file name for Spigot plugins.
pub const FILENAME_SPIGOT: &str = "plugin.yml";

/// Descriptor file name for BungeeCord plugins.
pub const FILENAME_BUNGEE: &str = "bungee.yml";

/// Errors from descriptor reading and writing.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to read descriptor '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write descriptor '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("descriptor i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse descriptor: {0}")]
    ParseError(String),

    #[error("failed to encode descriptor: {0}")]
    EmitError(String),

    #[error("cannot write a descriptor without a plugin name")]
    MissingName,
}

/// Strip the generated header from a written document.
///
/// Returns the text after the first blank line, or the whole text when there
/// is none.
///
/// ```
/// use plugmeta::core::descriptor::body;
///
/// assert_eq!(body("# generated\n\nname: test\n"), "name: test\n");
/// assert_eq!(body("name: test\n"), "name: test\n");
/// ```
pub fn body(text: &str) -> &str {
    match text.find("\n\n") {
        Some(index) => &text[index + 2..],
        None => text,
    }
}
