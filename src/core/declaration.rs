//! core::declaration
//!
//! Declarative plugin metadata as handed over by the extractor.
//!
//! # Overview
//!
//! The extractor inspects compiled plugin classes and emits a
//! [`DeclarationSet`]: which platform base classes were available, and for
//! every declared plugin class its ancestor chain and the metadata attached
//! to it. These records are plain data; validation happens in
//! [`crate::engine::processor`].
//!
//! # Formats
//!
//! A declaration file is JSON, TOML or YAML, chosen by its extension
//! (`.json`, `.toml`, `.yml`/`.yaml`). Unknown fields are rejected.
//!
//! # Example
//!
//! ```yaml
//! classes:
//!   - qualified_name: org.example.ExamplePlugin
//!     superclasses: [org.bukkit.plugin.java.JavaPlugin]
//!     plugin:
//!       name: Example
//!       version: 1.0.0
//!       dependencies:
//!         - name: Vault
//!           type: softdepend
//!       spigot:
//!         authors: [Zartec]
//!         commands:
//!           - name: example
//!             aliases: [ex]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{DependencyType, LoadOn, PermissionDefault, Platform};

/// Errors from loading a declaration file.
#[derive(Debug, Error)]
pub enum DeclarationError {
    #[error("failed to read declarations '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse declarations '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported declaration format '{0}', expected .json, .toml, .yml or .yaml")]
    UnsupportedFormat(PathBuf),
}

/// Everything the extractor found in one build pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeclarationSet {
    /// Platforms whose base class was available to the build.
    pub platforms: Vec<Platform>,

    /// Declared plugin classes, in discovery order.
    pub classes: Vec<PluginClass>,
}

impl Default for DeclarationSet {
    fn default() -> Self {
        Self {
            platforms: Platform::ALL.to_vec(),
            classes: Vec::new(),
        }
    }
}

impl DeclarationSet {
    /// Load a declaration set, picking the parser from the file extension.
    ///
    /// # Errors
    ///
    /// Returns `DeclarationError` if the file cannot be read, has an unknown
    /// extension, or does not parse.
    pub fn load(path: &Path) -> Result<Self, DeclarationError> {
        let format = Format::from_path(path)?;
        let contents = fs::read_to_string(path).map_err(|e| DeclarationError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        format
            .parse(&contents)
            .map_err(|message| DeclarationError::ParseError {
                path: path.to_path_buf(),
                message,
            })
    }

    pub fn is_available(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, DeclarationError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            Some("yml" | "yaml") => Ok(Format::Yaml),
            _ => Err(DeclarationError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse(self, contents: &str) -> Result<DeclarationSet, String> {
        match self {
            Format::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// A class carrying plugin metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginClass {
    /// Fully-qualified class name; becomes the descriptor's `main`.
    pub qualified_name: String,

    /// Ancestor chain, nearest first.
    #[serde(default)]
    pub superclasses: Vec<String>,

    pub plugin: PluginDeclaration,
}

impl PluginClass {
    /// Whether `class_name` appears in this class's ancestor chain.
    pub fn is_child_of(&self, class_name: &str) -> bool {
        self.superclasses.iter().any(|c| c == class_name)
    }

    /// Whether this class extends the base class of `platform`.
    pub fn belongs_to(&self, platform: Platform) -> bool {
        self.is_child_of(platform.base_class())
    }

    /// The unqualified class name.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

/// Metadata declared on a plugin class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginDeclaration {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub dependencies: Vec<DependencyDecl>,

    /// Present when the class declares Spigot settings.
    pub spigot: Option<SpigotSettings>,

    /// Present when the class declares BungeeCord settings.
    pub bungee: Option<BungeeSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyDecl {
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: DependencyType,
}

/// Spigot-only settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpigotSettings {
    pub load: Option<LoadOn>,
    pub authors: Vec<String>,
    pub website: Option<String>,
    pub database: Option<bool>,
    pub prefix: Option<String>,
    pub commands: Vec<CommandDecl>,
    pub permissions: Vec<PermissionDecl>,
}

/// BungeeCord-only settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BungeeSettings {
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandDecl {
    pub name: String,
    pub description: Option<String>,
    pub aliases: Vec<String>,
    pub permission: Option<String>,
    pub usage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermissionDecl {
    pub name: String,
    pub description: Option<String>,
    pub default: Option<PermissionDefault>,
    pub children: Vec<ChildDecl>,
}

/// A child permission granted along with its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildDecl {
    pub name: String,

    #[serde(default = "default_child_value")]
    pub value: bool,
}

fn default_child_value() -> bool {
    true
}
