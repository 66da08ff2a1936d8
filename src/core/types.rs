//! core::types
//!
//! Closed vocabularies used by plugin descriptors.
//!
//! # Types
//!
//! - [`DependencyType`] - How a plugin relates to another plugin
//! - [`LoadOn`] - When the server loads the plugin
//! - [`PermissionDefault`] - Who holds a permission unless configured otherwise
//! - [`Platform`] - The hosting platform a descriptor is generated for
//!
//! # Parsing
//!
//! Every vocabulary parses case-insensitively from its canonical name, so
//! hand-written descriptors and declaration files may use `startup` or
//! `STARTUP` interchangeably.
//!
//! # Examples
//!
//! ```
//! use plugmeta::core::types::{DependencyType, LoadOn, PermissionDefault};
//!
//! assert_eq!("softdepend".parse::<DependencyType>().unwrap(), DependencyType::SoftDepend);
//! assert_eq!("STARTUP".parse::<LoadOn>().unwrap(), LoadOn::Startup);
//! assert_eq!("!op".parse::<PermissionDefault>().unwrap(), PermissionDefault::NoOp);
//! assert!("sometimes".parse::<LoadOn>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from vocabulary parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid dependency type: {0}")]
    InvalidDependencyType(String),

    #[error("invalid load phase: {0}")]
    InvalidLoadOn(String),

    #[error("invalid permission default: {0}")]
    InvalidPermissionDefault(String),

    #[error("invalid platform: {0}")]
    InvalidPlatform(String),
}

/// The kind of a plugin dependency.
///
/// Each kind maps to its own list in the descriptor (`depend`,
/// `softdepend`, `loadbefore`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DependencyType {
    /// Required; the plugin fails to load without it.
    #[default]
    Depend,
    /// Optional; loaded first when present.
    SoftDepend,
    /// The other plugin must load after this one.
    LoadBefore,
}

impl DependencyType {
    /// All dependency types in descriptor order.
    pub const ALL: [DependencyType; 3] = [
        DependencyType::Depend,
        DependencyType::SoftDepend,
        DependencyType::LoadBefore,
    ];

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::Depend => "DEPEND",
            DependencyType::SoftDepend => "SOFTDEPEND",
            DependencyType::LoadBefore => "LOADBEFORE",
        }
    }

    /// The descriptor key holding dependencies of this type.
    pub fn descriptor_key(&self) -> &'static str {
        match self {
            DependencyType::Depend => "depend",
            DependencyType::SoftDepend => "softdepend",
            DependencyType::LoadBefore => "loadbefore",
        }
    }
}

impl FromStr for DependencyType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEPEND" => Ok(DependencyType::Depend),
            "SOFTDEPEND" | "SOFT_DEPEND" => Ok(DependencyType::SoftDepend),
            "LOADBEFORE" | "LOAD_BEFORE" => Ok(DependencyType::LoadBefore),
            _ => Err(TypeError::InvalidDependencyType(s.to_string())),
        }
    }
}

/// When the server loads a plugin.
///
/// An unset load phase is distinct from an explicit [`LoadOn::PostWorld`]:
/// only the latter is written to the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LoadOn {
    /// Load on server startup, before worlds. Used by world generators.
    Startup,
    /// Load after the worlds are loaded.
    PostWorld,
}

impl LoadOn {
    /// Canonical upper-case name, as written to descriptors.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadOn::Startup => "STARTUP",
            LoadOn::PostWorld => "POSTWORLD",
        }
    }
}

impl FromStr for LoadOn {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STARTUP" => Ok(LoadOn::Startup),
            "POSTWORLD" | "POST_WORLD" => Ok(LoadOn::PostWorld),
            _ => Err(TypeError::InvalidLoadOn(s.to_string())),
        }
    }
}

/// Default holders of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PermissionDefault {
    /// Everybody.
    True,
    /// Nobody.
    False,
    /// Operators only.
    Op,
    /// Everybody except operators.
    NoOp,
}

impl PermissionDefault {
    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionDefault::True => "TRUE",
            PermissionDefault::False => "FALSE",
            PermissionDefault::Op => "OP",
            PermissionDefault::NoOp => "NO_OP",
        }
    }

    /// Map a YAML boolean onto a default.
    pub fn from_bool(value: bool) -> Self {
        if value {
            PermissionDefault::True
        } else {
            PermissionDefault::False
        }
    }
}

impl FromStr for PermissionDefault {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == '!')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "true" => Ok(PermissionDefault::True),
            "false" => Ok(PermissionDefault::False),
            "op" | "isop" | "operator" | "isoperator" | "admin" | "isadmin" => {
                Ok(PermissionDefault::Op)
            }
            "noop" | "notop" | "!op" | "notoperator" | "!operator" | "notadmin" | "!admin" => {
                Ok(PermissionDefault::NoOp)
            }
            _ => Err(TypeError::InvalidPermissionDefault(s.to_string())),
        }
    }
}

/// A hosting platform with its own descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Platform {
    /// Spigot/Bukkit servers, descriptor `plugin.yml`.
    Spigot,
    /// BungeeCord proxies, descriptor `bungee.yml`.
    Bungee,
}

impl Platform {
    /// All platforms in processing order.
    pub const ALL: [Platform; 2] = [Platform::Spigot, Platform::Bungee];

    /// Lower-case platform name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Spigot => "spigot",
            Platform::Bungee => "bungee",
        }
    }

    /// The descriptor file name used when no explicit output is given.
    pub fn default_filename(&self) -> &'static str {
        match self {
            Platform::Spigot => crate::core::descriptor::FILENAME_SPIGOT,
            Platform::Bungee => crate::core::descriptor::FILENAME_BUNGEE,
        }
    }

    /// Fully-qualified name of the class every plugin of this platform extends.
    pub fn base_class(&self) -> &'static str {
        match self {
            Platform::Spigot => "org.bukkit.plugin.java.JavaPlugin",
            Platform::Bungee => "net.md_5.bungee.api.plugin.Plugin",
        }
    }
}

impl FromStr for Platform {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spigot" | "bukkit" => Ok(Platform::Spigot),
            "bungee" | "bungeecord" => Ok(Platform::Bungee),
            _ => Err(TypeError::InvalidPlatform(s.to_string())),
        }
    }
}

macro_rules! string_conversions {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = TypeError;

                fn try_from(s: String) -> Result<Self, Self::Error> {
                    s.parse()
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

string_conversions!(DependencyType, LoadOn, PermissionDefault, Platform);
