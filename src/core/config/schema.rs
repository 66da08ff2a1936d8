//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Location
//!
//! 1. `$PLUGMETA_CONFIG` if set
//! 2. `./plugmeta.toml`
//!
//! # Validation
//!
//! Paths are checked after parsing: an empty output path or base file
//! entry is rejected rather than silently resolving to the working
//! directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Platform;

/// Contents of `plugmeta.toml`.
///
/// # Example
///
/// ```toml
/// resource_dir = "build/resources/main"
///
/// [spigot]
/// extra_files = ["base/plugin.yml"]
/// output = "out/plugin.yml"
///
/// [bungee]
/// extra_files = []
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory receiving descriptors without an explicit output path.
    pub resource_dir: Option<PathBuf>,

    /// Spigot descriptor settings
    pub spigot: Option<PlatformConfig>,

    /// BungeeCord descriptor settings
    pub bungee: Option<PlatformConfig>,
}

impl ConfigFile {
    /// Settings for `platform`, if the file has a table for it.
    pub fn platform(&self, platform: Platform) -> Option<&PlatformConfig> {
        match platform {
            Platform::Spigot => self.spigot.as_ref(),
            Platform::Bungee => self.bungee.as_ref(),
        }
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.resource_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "resource_dir cannot be empty".to_string(),
                ));
            }
        }

        for platform in Platform::ALL {
            if let Some(settings) = self.platform(platform) {
                settings.validate(platform)?;
            }
        }

        Ok(())
    }
}

/// Per-platform settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformConfig {
    /// Existing descriptors merged, in order, into the generated one.
    pub extra_files: Vec<PathBuf>,

    /// Explicit output path.
    pub output: Option<PathBuf>,
}

impl PlatformConfig {
    fn validate(&self, platform: Platform) -> Result<(), ConfigError> {
        if self.extra_files.iter().any(|f| f.as_os_str().is_empty()) {
            return Err(ConfigError::InvalidValue(format!(
                "{}.extra_files cannot contain empty paths",
                platform
            )));
        }

        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "{}.output cannot be empty",
                    platform
                )));
            }
        }

        Ok(())
    }
}
