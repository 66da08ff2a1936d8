//! core::metadata::permission
//!
//! A permission node declared by a plugin.

use indexmap::IndexMap;

use super::{require_non_empty, MetadataError};
use crate::core::types::PermissionDefault;

/// A permission node with its default and child nodes.
///
/// Children map a child node name to the value it is granted with when this
/// permission is held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginPermission {
    name: String,
    description: Option<String>,
    default: Option<PermissionDefault>,
    children: IndexMap<String, bool>,
}

impl PluginPermission {
    /// Create a permission called `name`.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, MetadataError> {
        Ok(Self {
            name: require_non_empty(name, "permission name")?,
            description: None,
            default: None,
            children: IndexMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the permission.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), MetadataError> {
        self.name = require_non_empty(name, "permission name")?;
        Ok(())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn default_value(&self) -> Option<PermissionDefault> {
        self.default
    }

    pub fn set_default(&mut self, default: PermissionDefault) {
        self.default = Some(default);
    }

    /// Add a child node.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` for an empty node and
    /// `MetadataError::DuplicateKey` if the child is already present.
    pub fn add_child(&mut self, node: impl Into<String>, value: bool) -> Result<(), MetadataError> {
        let node = require_non_empty(node, "child permission")?;
        if self.children.contains_key(&node) {
            return Err(MetadataError::DuplicateKey {
                kind: "child permission",
                name: node,
            });
        }
        self.children.insert(node, value);
        Ok(())
    }

    /// Remove a child node, returning whether it was present.
    pub fn remove_child(&mut self, node: &str) -> bool {
        self.children.shift_remove(node).is_some()
    }

    pub fn children(&self) -> &IndexMap<String, bool> {
        &self.children
    }
}
