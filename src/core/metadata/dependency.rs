//! core::metadata::dependency
//!
//! A dependency on another plugin.

use super::{require_non_empty, MetadataError};
use crate::core::types::DependencyType;

/// A named dependency on another plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginDependency {
    name: String,
    kind: DependencyType,
}

impl PluginDependency {
    /// Create a dependency on the plugin called `name`.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` if `name` is empty.
    pub fn new(name: impl Into<String>, kind: DependencyType) -> Result<Self, MetadataError> {
        Ok(Self {
            name: require_non_empty(name, "dependency name")?,
            kind,
        })
    }

    /// Create a hard dependency ([`DependencyType::Depend`]).
    pub fn depend(name: impl Into<String>) -> Result<Self, MetadataError> {
        Self::new(name, DependencyType::default())
    }

    /// The name of the plugin depended on.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dependency type.
    pub fn kind(&self) -> DependencyType {
        self.kind
    }

    /// Change the dependency type.
    pub fn set_kind(&mut self, kind: DependencyType) {
        self.kind = kind;
    }
}
