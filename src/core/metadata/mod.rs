//! core::metadata
//!
//! The in-memory plugin metadata model.
//!
//! # Modules
//!
//! - [`model`] - [`PluginMetadata`], the root record with merge semantics
//! - [`dependency`] - [`PluginDependency`] records
//! - [`command`] - [`PluginCommand`] records
//! - [`permission`] - [`PluginPermission`] records
//!
//! # Keyed Collections
//!
//! Dependencies, commands and permissions are keyed by name. Adding a record
//! whose name is already present fails with [`MetadataError::DuplicateKey`]
//! and leaves the collection untouched; `replace_*` upserts instead.
//! Collections keep insertion order so serialized output is deterministic.
//!
//! # Example
//!
//! ```
//! use plugmeta::core::metadata::{PluginDependency, PluginMetadata};
//! use plugmeta::core::types::DependencyType;
//!
//! let mut meta = PluginMetadata::new("example");
//! meta.add_dependency(PluginDependency::new("Vault", DependencyType::SoftDepend).unwrap())
//!     .unwrap();
//!
//! // A second add with the same name is rejected
//! let dup = PluginDependency::new("Vault", DependencyType::Depend).unwrap();
//! assert!(meta.add_dependency(dup.clone()).is_err());
//!
//! // Replace upserts and hands back the previous record
//! let previous = meta.replace_dependency(dup).unwrap();
//! assert_eq!(previous.kind(), DependencyType::SoftDepend);
//! ```

pub mod command;
pub mod dependency;
pub mod model;
pub mod permission;

pub use command::PluginCommand;
pub use dependency::PluginDependency;
pub use model::PluginMetadata;
pub use permission::PluginPermission;

use thiserror::Error;

/// Errors from metadata mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// An empty string was given where a non-empty value is required.
    #[error("{field} must not be empty")]
    EmptyValue { field: &'static str },

    /// A keyed entry with the same name already exists.
    #[error("duplicate {kind} with name '{name}'")]
    DuplicateKey { kind: &'static str, name: String },
}

/// Reject empty strings for a required field.
pub(crate) fn require_non_empty(
    value: impl Into<String>,
    field: &'static str,
) -> Result<String, MetadataError> {
    let value = value.into();
    if value.is_empty() {
        return Err(MetadataError::EmptyValue { field });
    }
    Ok(value)
}
