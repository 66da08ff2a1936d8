//! core::descriptor::read
//!
//! Deserialization of descriptor YAML into [`PluginMetadata`].
//!
//! The document is parsed into an untyped [`Value`] first so that a value of
//! the wrong type skips its key instead of failing the whole read.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::warn;

use super::DescriptorError;
use crate::core::metadata::{PluginCommand, PluginDependency, PluginMetadata, PluginPermission};
use crate::core::types::{DependencyType, PermissionDefault};

/// Read metadata from a descriptor stream.
///
/// Returns `Ok(None)` when the document holds no plugin metadata.
///
/// # Errors
///
/// Returns `DescriptorError::Io` if the stream cannot be read and
/// `DescriptorError::ParseError` if it is not valid YAML.
pub fn read<R: Read>(mut reader: R) -> Result<Option<PluginMetadata>, DescriptorError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_str(&text)
}

/// Read metadata from the descriptor file at `path`.
pub fn read_path(path: &Path) -> Result<Option<PluginMetadata>, DescriptorError> {
    let read_error = |source| DescriptorError::ReadError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut text = String::new();
    BufReader::new(file)
        .read_to_string(&mut text)
        .map_err(read_error)?;
    parse_str(&text)
}

/// Parse metadata from descriptor text.
///
/// A document that is empty, holds only comments, is not a mapping, or has
/// no string `name` yields `Ok(None)`.
///
/// # Example
///
/// ```
/// use plugmeta::core::descriptor::parse_str;
///
/// assert!(parse_str("").unwrap().is_none());
/// assert!(parse_str("version: 1.0.0").unwrap().is_none());
///
/// let meta = parse_str("name: test").unwrap().unwrap();
/// assert_eq!(meta.name(), Some("test"));
/// assert_eq!(meta.main(), None);
/// ```
pub fn parse_str(text: &str) -> Result<Option<PluginMetadata>, DescriptorError> {
    if is_blank_document(text) {
        return Ok(None);
    }

    let value: Value =
        serde_yaml::from_str(text).map_err(|e| DescriptorError::ParseError(e.to_string()))?;
    let Value::Mapping(map) = value else {
        return Ok(None);
    };
    let Some(name) = string(&map, "name") else {
        return Ok(None);
    };

    let mut meta = PluginMetadata::new(name);

    if let Some(version) = string(&map, "version") {
        meta.set_version(version);
    }
    if let Some(description) = string(&map, "description") {
        meta.set_description(description);
    }
    if let Some(load) = string(&map, "load") {
        match load.parse() {
            Ok(load) => meta.set_load_on(load),
            Err(err) => warn!(%err, "ignoring load phase"),
        }
    }
    read_authors(&map, &mut meta);
    if let Some(website) = string(&map, "website") {
        meta.set_website(website);
    }
    if let Some(main) = string(&map, "main") {
        if let Err(err) = meta.set_main(main) {
            warn!(%err, "ignoring main class");
        }
    }
    if let Some(database) = map.get("database").and_then(Value::as_bool) {
        meta.set_database(database);
    }
    for kind in DependencyType::ALL {
        read_dependencies(&map, kind, &mut meta);
    }
    if let Some(prefix) = string(&map, "prefix") {
        meta.set_prefix(prefix);
    }
    if let Some(commands) = map.get("commands").and_then(Value::as_mapping) {
        read_commands(commands, &mut meta);
    }
    if let Some(permissions) = map.get("permissions").and_then(Value::as_mapping) {
        read_permissions(permissions, &mut meta);
    }

    Ok(Some(meta))
}

fn is_blank_document(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn string<'a>(map: &'a Mapping, key: &str) -> Option<&'a str> {
    let value = map.get(key)?;
    let text = value.as_str();
    if text.is_none() && !value.is_null() {
        warn!(key, "ignoring non-string descriptor value");
    }
    text
}

/// Strings of a sequence, skipping other values.
fn strings(value: &Value) -> Vec<&str> {
    value
        .as_sequence()
        .map(|seq| seq.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// `authors` wins over `author` when a document carries both.
fn read_authors(map: &Mapping, meta: &mut PluginMetadata) {
    let authors = match map.get("authors").filter(|v| v.is_sequence()) {
        Some(list) => strings(list),
        None => string(map, "author").into_iter().collect(),
    };

    for author in authors {
        if let Err(err) = meta.add_author(author) {
            warn!(%err, "skipping author");
        }
    }
}

fn read_dependencies(map: &Mapping, kind: DependencyType, meta: &mut PluginMetadata) {
    let Some(list) = map.get(kind.descriptor_key()) else {
        return;
    };

    for name in strings(list) {
        let added = PluginDependency::new(name, kind).and_then(|dep| meta.add_dependency(dep));
        if let Err(err) = added {
            warn!(%err, key = kind.descriptor_key(), "skipping dependency");
        }
    }
}

fn read_commands(commands: &Mapping, meta: &mut PluginMetadata) {
    for (key, value) in commands {
        let Some(name) = key.as_str() else {
            warn!("skipping command with non-string name");
            continue;
        };
        let mut command = match PluginCommand::new(name) {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "skipping command");
                continue;
            }
        };

        if let Some(fields) = value.as_mapping() {
            if let Some(description) = string(fields, "description") {
                command.set_description(description);
            }
            if let Some(aliases) = fields.get("aliases") {
                let aliases = match aliases.as_str() {
                    Some(single) => vec![single],
                    None => strings(aliases),
                };
                for alias in aliases {
                    if let Err(err) = command.add_alias(alias) {
                        warn!(%err, command = name, "skipping alias");
                    }
                }
            }
            if let Some(permission) = string(fields, "permission") {
                command.set_permission(permission);
            }
            if let Some(usage) = string(fields, "usage") {
                command.set_usage(usage);
            }
        }

        if let Err(err) = meta.add_command(command) {
            warn!(%err, "skipping command");
        }
    }
}

fn read_permissions(permissions: &Mapping, meta: &mut PluginMetadata) {
    for (key, value) in permissions {
        let Some(name) = key.as_str() else {
            warn!("skipping permission with non-string name");
            continue;
        };
        let mut permission = match PluginPermission::new(name) {
            Ok(permission) => permission,
            Err(err) => {
                warn!(%err, "skipping permission");
                continue;
            }
        };

        if let Some(fields) = value.as_mapping() {
            if let Some(description) = string(fields, "description") {
                permission.set_description(description);
            }
            if let Some(default) = fields.get("default").and_then(permission_default) {
                permission.set_default(default);
            }
            if let Some(children) = fields.get("children").and_then(Value::as_mapping) {
                for (child, state) in children {
                    // Null states carry no grant and are dropped.
                    let (Some(child), Some(state)) = (child.as_str(), state.as_bool()) else {
                        continue;
                    };
                    if let Err(err) = permission.add_child(child, state) {
                        warn!(%err, permission = name, "skipping child permission");
                    }
                }
            }
        }

        if let Err(err) = meta.add_permission(permission) {
            warn!(%err, "skipping permission");
        }
    }
}

fn permission_default(value: &Value) -> Option<PermissionDefault> {
    if let Some(flag) = value.as_bool() {
        return Some(PermissionDefault::from_bool(flag));
    }
    match value.as_str()?.parse() {
        Ok(default) => Some(default),
        Err(err) => {
            warn!(%err, "ignoring permission default");
            None
        }
    }
}
