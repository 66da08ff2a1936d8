//! core::metadata::command
//!
//! A command registered by a plugin.

use super::{require_non_empty, MetadataError};

/// A plugin command with its optional help texts and aliases.
///
/// Aliases keep their insertion order; a repeated alias is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginCommand {
    name: String,
    description: Option<String>,
    aliases: Vec<String>,
    permission: Option<String>,
    usage: Option<String>,
}

impl PluginCommand {
    /// Create a command called `name`.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, MetadataError> {
        Ok(Self {
            name: require_non_empty(name, "command name")?,
            description: None,
            aliases: Vec::new(),
            permission: None,
            usage: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the command.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), MetadataError> {
        self.name = require_non_empty(name, "command name")?;
        Ok(())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Append an alias.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` for an empty alias and
    /// `MetadataError::DuplicateKey` if the alias is already present.
    pub fn add_alias(&mut self, alias: impl Into<String>) -> Result<(), MetadataError> {
        let alias = require_non_empty(alias, "alias")?;
        if self.aliases.contains(&alias) {
            return Err(MetadataError::DuplicateKey {
                kind: "alias",
                name: alias,
            });
        }
        self.aliases.push(alias);
        Ok(())
    }

    /// Remove an alias, returning whether it was present.
    pub fn remove_alias(&mut self, alias: &str) -> bool {
        let before = self.aliases.len();
        self.aliases.retain(|a| a != alias);
        self.aliases.len() != before
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    pub fn set_permission(&mut self, permission: impl Into<String>) {
        self.permission = Some(permission.into());
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    pub fn set_usage(&mut self, usage: impl Into<String>) {
        self.usage = Some(usage.into());
    }
}
