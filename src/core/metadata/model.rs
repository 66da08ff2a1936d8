//! core::metadata::model
//!
//! The root metadata record of a plugin descriptor.
//!
//! # Merge Semantics
//!
//! [`PluginMetadata::accept`] merges another record into this one:
//! - every scalar set in `other` overwrites the value here
//! - a non-empty author list in `other` replaces the authors here
//! - dependencies, commands and permissions of `other` are upserted by name
//!
//! Fields unset in `other` are left untouched. The merge cannot fail.

use indexmap::IndexMap;

use super::{require_non_empty, MetadataError, PluginCommand, PluginDependency, PluginPermission};
use crate::core::types::{DependencyType, LoadOn};

/// Metadata describing one plugin.
///
/// Equality compares keyed collections as maps, independent of insertion
/// order, while authors compare as an ordered list.
///
/// # Example
///
/// ```
/// use plugmeta::core::metadata::PluginMetadata;
///
/// let mut base = PluginMetadata::new("example");
/// base.set_version("1.0.0");
/// base.set_website("https://example.org");
///
/// let mut update = PluginMetadata::new("example");
/// update.set_version("1.1.0");
///
/// base.accept(&update);
/// assert_eq!(base.version(), Some("1.1.0"));
/// assert_eq!(base.website(), Some("https://example.org"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginMetadata {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    load_on: Option<LoadOn>,
    authors: Vec<String>,
    website: Option<String>,
    main: Option<String>,
    database: Option<bool>,
    prefix: Option<String>,
    dependencies: IndexMap<String, PluginDependency>,
    commands: IndexMap<String, PluginCommand>,
    permissions: IndexMap<String, PluginPermission>,
}

impl PluginMetadata {
    /// Create metadata for the plugin called `name`.
    ///
    /// An empty `name` leaves the name unset rather than storing `""`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: (!name.is_empty()).then_some(name),
            version: None,
            description: None,
            load_on: None,
            authors: Vec::new(),
            website: None,
            main: None,
            database: None,
            prefix: None,
            dependencies: IndexMap::new(),
            commands: IndexMap::new(),
            permissions: IndexMap::new(),
        }
    }

    /// Merge `other` into this record.
    pub fn accept(&mut self, other: &PluginMetadata) {
        merge_scalar(&mut self.name, &other.name);
        merge_scalar(&mut self.version, &other.version);
        merge_scalar(&mut self.description, &other.description);
        merge_scalar(&mut self.load_on, &other.load_on);

        if !other.authors.is_empty() {
            self.authors.clone_from(&other.authors);
        }

        merge_scalar(&mut self.website, &other.website);
        merge_scalar(&mut self.main, &other.main);
        merge_scalar(&mut self.database, &other.database);

        for dependency in other.dependencies.values() {
            self.replace_dependency(dependency.clone());
        }
        for command in other.commands.values() {
            self.replace_command(command.clone());
        }
        for permission in other.permissions.values() {
            self.replace_permission(permission.clone());
        }

        merge_scalar(&mut self.prefix, &other.prefix);
    }

    // =========================================================================
    // Scalars
    // =========================================================================

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the plugin name.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), MetadataError> {
        self.name = Some(require_non_empty(name, "name")?);
        Ok(())
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn load_on(&self) -> Option<LoadOn> {
        self.load_on
    }

    pub fn set_load_on(&mut self, load_on: LoadOn) {
        self.load_on = Some(load_on);
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn set_website(&mut self, website: impl Into<String>) {
        self.website = Some(website.into());
    }

    /// Fully-qualified name of the plugin's main class.
    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    /// Set the main class.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` if `main` is empty.
    pub fn set_main(&mut self, main: impl Into<String>) -> Result<(), MetadataError> {
        self.main = Some(require_non_empty(main, "main")?);
        Ok(())
    }

    /// Whether the plugin uses the server database; `None` when unspecified.
    pub fn database(&self) -> Option<bool> {
        self.database
    }

    pub fn set_database(&mut self, database: bool) {
        self.database = Some(database);
    }

    /// Log prefix of the plugin.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = Some(prefix.into());
    }

    // =========================================================================
    // Authors
    // =========================================================================

    /// Append an author. Repeated authors are kept.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyValue` if `author` is empty.
    pub fn add_author(&mut self, author: impl Into<String>) -> Result<(), MetadataError> {
        self.authors.push(require_non_empty(author, "author")?);
        Ok(())
    }

    /// Remove the first occurrence of `author`, returning whether one existed.
    pub fn remove_author(&mut self, author: &str) -> bool {
        match self.authors.iter().position(|a| a == author) {
            Some(index) => {
                self.authors.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_authors(&mut self) {
        self.authors.clear();
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    // =========================================================================
    // Dependencies
    // =========================================================================

    /// Add a dependency.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::DuplicateKey` if a dependency with the same
    /// name exists; the collection is left unchanged.
    pub fn add_dependency(&mut self, dependency: PluginDependency) -> Result<(), MetadataError> {
        let name = dependency.name().to_string();
        insert_unique(&mut self.dependencies, "dependency", name, dependency)
    }

    /// Insert or replace a dependency, returning the replaced record.
    pub fn replace_dependency(&mut self, dependency: PluginDependency) -> Option<PluginDependency> {
        self.dependencies
            .insert(dependency.name().to_string(), dependency)
    }

    /// Remove the dependency called `name`, returning whether it existed.
    pub fn remove_dependency(&mut self, name: &str) -> bool {
        self.dependencies.shift_remove(name).is_some()
    }

    pub fn dependency(&self, name: &str) -> Option<&PluginDependency> {
        self.dependencies.get(name)
    }

    /// All dependencies in insertion order.
    pub fn dependencies(&self) -> impl Iterator<Item = &PluginDependency> + '_ {
        self.dependencies.values()
    }

    /// Names of the dependencies of one type, in insertion order.
    pub fn dependency_names(&self, kind: DependencyType) -> Vec<String> {
        self.dependencies
            .values()
            .filter(|d| d.kind() == kind)
            .map(|d| d.name().to_string())
            .collect()
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Add a command.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::DuplicateKey` if a command with the same name
    /// exists; the collection is left unchanged.
    pub fn add_command(&mut self, command: PluginCommand) -> Result<(), MetadataError> {
        let name = command.name().to_string();
        insert_unique(&mut self.commands, "command", name, command)
    }

    /// Insert or replace a command, returning the replaced record.
    pub fn replace_command(&mut self, command: PluginCommand) -> Option<PluginCommand> {
        self.commands.insert(command.name().to_string(), command)
    }

    /// Remove the command called `name`, returning whether it existed.
    pub fn remove_command(&mut self, name: &str) -> bool {
        self.commands.shift_remove(name).is_some()
    }

    pub fn command(&self, name: &str) -> Option<&PluginCommand> {
        self.commands.get(name)
    }

    /// All commands in insertion order.
    pub fn commands(&self) -> impl Iterator<Item = &PluginCommand> + '_ {
        self.commands.values()
    }

    // =========================================================================
    // Permissions
    // =========================================================================

    /// Add a permission.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::DuplicateKey` if a permission with the same
    /// name exists; the collection is left unchanged.
    pub fn add_permission(&mut self, permission: PluginPermission) -> Result<(), MetadataError> {
        let name = permission.name().to_string();
        insert_unique(&mut self.permissions, "permission", name, permission)
    }

    /// Insert or replace a permission, returning the replaced record.
    pub fn replace_permission(&mut self, permission: PluginPermission) -> Option<PluginPermission> {
        self.permissions
            .insert(permission.name().to_string(), permission)
    }

    /// Remove the permission called `name`, returning whether it existed.
    pub fn remove_permission(&mut self, name: &str) -> bool {
        self.permissions.shift_remove(name).is_some()
    }

    pub fn permission(&self, name: &str) -> Option<&PluginPermission> {
        self.permissions.get(name)
    }

    /// All permissions in insertion order.
    pub fn permissions(&self) -> impl Iterator<Item = &PluginPermission> + '_ {
        self.permissions.values()
    }
}

fn merge_scalar<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if let Some(value) = source {
        *target = Some(value.clone());
    }
}

fn insert_unique<T>(
    map: &mut IndexMap<String, T>,
    kind: &'static str,
    name: String,
    value: T,
) -> Result<(), MetadataError> {
    if map.contains_key(&name) {
        return Err(MetadataError::DuplicateKey { kind, name });
    }
    map.insert(name, value);
    Ok(())
}
