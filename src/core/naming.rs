//! core::naming
//!
//! Plugin naming rules and validation.
//!
//! # Rules
//!
//! A plugin name consists of ASCII letters, digits, `-` and `_`, and is at
//! most 63 characters long. The whole name must match; a valid prefix
//! followed by anything else is rejected.

use std::sync::LazyLock;

use regex::Regex;

/// The pattern plugin names must match, as shown in diagnostics.
pub const NAME_PATTERN: &str = "[A-Za-z0-9-_]{0,63}";

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{0,63}$").expect("static regex is valid"));

/// Check whether a plugin name matches [`NAME_PATTERN`].
///
/// # Example
///
/// ```
/// use plugmeta::core::naming::is_valid_plugin_name;
///
/// assert!(is_valid_plugin_name("My_Plugin-2"));
/// assert!(!is_valid_plugin_name("my plugin"));
/// assert!(!is_valid_plugin_name(&"a".repeat(64)));
/// ```
pub fn is_valid_plugin_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}
