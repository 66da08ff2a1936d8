//! core::config
//!
//! Processor options and their sources.
//!
//! # Precedence
//!
//! Options are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file (`$PLUGMETA_CONFIG`, else `./plugmeta.toml`)
//! 3. Processor key/value options (`-A key=value`)
//! 4. CLI flags (not handled here)
//!
//! # Processor Options
//!
//! | Key | Value |
//! |---|---|
//! | `extraMetaFilesSpigot` | `;`-separated base descriptors for Spigot |
//! | `extraMetaFilesBungee` | `;`-separated base descriptors for BungeeCord |
//! | `metaOutputFileSpigot` | explicit `plugin.yml` output |
//! | `metaOutputFileBungee` | explicit `bungee.yml` output |
//! | `resourceDir` | directory for descriptors without explicit output |
//!
//! Empty values are ignored; unknown keys are an error.
//!
//! # Example
//!
//! ```
//! use plugmeta::core::config::ProcessorOptions;
//! use plugmeta::core::types::Platform;
//! use std::path::Path;
//!
//! let mut options = ProcessorOptions::default();
//! options.apply_option("extraMetaFilesSpigot", "a.yml;b.yml").unwrap();
//! options.apply_option("resourceDir", "build").unwrap();
//!
//! assert_eq!(options.platform(Platform::Spigot).extra_files.len(), 2);
//! assert_eq!(options.output_path(Platform::Bungee), Path::new("build/bungee.yml"));
//! ```

pub mod schema;

pub use schema::{ConfigFile, PlatformConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::Platform;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PLUGMETA_CONFIG";

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "plugmeta.toml";

pub const EXTRA_FILES_SPIGOT_OPTION: &str = "extraMetaFilesSpigot";
pub const EXTRA_FILES_BUNGEE_OPTION: &str = "extraMetaFilesBungee";
pub const OUTPUT_FILE_SPIGOT_OPTION: &str = "metaOutputFileSpigot";
pub const OUTPUT_FILE_BUNGEE_OPTION: &str = "metaOutputFileBungee";
pub const RESOURCE_DIR_OPTION: &str = "resourceDir";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown processor option '{0}'")]
    UnknownOption(String),
}

/// A loaded config file and where it came from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: ConfigFile,
    path: Option<PathBuf>,
}

impl Config {
    /// Load the config file from its standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if `$PLUGMETA_CONFIG` names a missing file, or if a
    /// config file exists but cannot be parsed. A missing
    /// `./plugmeta.toml` is not an error (defaults are used).
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        let local = Path::new(CONFIG_FILENAME);
        if local.exists() {
            return Self::load_from(local);
        }

        Ok(Self::default())
    }

    /// Load and validate the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Path of the loaded file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Base files and output target of one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformOptions {
    pub extra_files: Vec<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Fully resolved generator options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorOptions {
    pub resource_dir: PathBuf,
    pub spigot: PlatformOptions,
    pub bungee: PlatformOptions,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from("."),
            spigot: PlatformOptions::default(),
            bungee: PlatformOptions::default(),
        }
    }
}

impl ProcessorOptions {
    /// Defaults overridden by the config file.
    pub fn from_config(config: &Config) -> Self {
        let mut options = Self::default();
        if let Some(dir) = &config.file.resource_dir {
            options.resource_dir = dir.clone();
        }

        for platform in Platform::ALL {
            if let Some(settings) = config.file.platform(platform) {
                let target = options.platform_mut(platform);
                target.extra_files = settings.extra_files.clone();
                target.output = settings.output.clone();
            }
        }

        options
    }

    pub fn platform(&self, platform: Platform) -> &PlatformOptions {
        match platform {
            Platform::Spigot => &self.spigot,
            Platform::Bungee => &self.bungee,
        }
    }

    pub fn platform_mut(&mut self, platform: Platform) -> &mut PlatformOptions {
        match platform {
            Platform::Spigot => &mut self.spigot,
            Platform::Bungee => &mut self.bungee,
        }
    }

    /// The explicitly configured output of `platform`, if any.
    pub fn explicit_output(&self, platform: Platform) -> Option<&Path> {
        self.platform(platform).output.as_deref()
    }

    /// Where the descriptor of `platform` is written.
    ///
    /// Falls back to the platform's default file name inside the resource
    /// directory.
    pub fn output_path(&self, platform: Platform) -> PathBuf {
        match self.explicit_output(platform) {
            Some(path) => path.to_path_buf(),
            None => self.resource_dir.join(platform.default_filename()),
        }
    }

    /// Apply a single processor option.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownOption` for an unrecognized key.
    pub fn apply_option(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let known = matches!(
            key,
            EXTRA_FILES_SPIGOT_OPTION
                | EXTRA_FILES_BUNGEE_OPTION
                | OUTPUT_FILE_SPIGOT_OPTION
                | OUTPUT_FILE_BUNGEE_OPTION
                | RESOURCE_DIR_OPTION
        );
        if !known {
            return Err(ConfigError::UnknownOption(key.to_string()));
        }
        if value.is_empty() {
            return Ok(());
        }

        match key {
            EXTRA_FILES_SPIGOT_OPTION => self.spigot.extra_files = split_paths(value),
            EXTRA_FILES_BUNGEE_OPTION => self.bungee.extra_files = split_paths(value),
            OUTPUT_FILE_SPIGOT_OPTION => self.spigot.output = Some(PathBuf::from(value)),
            OUTPUT_FILE_BUNGEE_OPTION => self.bungee.output = Some(PathBuf::from(value)),
            _ => self.resource_dir = PathBuf::from(value),
        }
        Ok(())
    }

    /// Apply a `key=value` processor option.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `option` has no `=`.
    pub fn apply_assignment(&mut self, option: &str) -> Result<(), ConfigError> {
        let (key, value) = option.split_once('=').ok_or_else(|| {
            ConfigError::InvalidValue(format!("expected key=value, got '{}'", option))
        })?;
        self.apply_option(key.trim(), value.trim())
    }
}

fn split_paths(value: &str) -> Vec<PathBuf> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
