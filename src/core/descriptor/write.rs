//! core::descriptor::write
//!
//! Serialization of [`PluginMetadata`] into descriptor YAML.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use super::DescriptorError;
use crate::core::metadata::{PluginCommand, PluginMetadata, PluginPermission};
use crate::core::types::{DependencyType, LoadOn, PermissionDefault};

/// Timestamp layout of the generated header.
const HEADER_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// The serialized shape of a descriptor. Field order is key order.
#[derive(Serialize)]
struct DescriptorDocument<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load: Option<LoadOn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authors: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    website: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    main: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    depend: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    softdepend: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loadbefore: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    commands: IndexMap<&'a str, CommandDocument<'a>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    permissions: IndexMap<&'a str, PermissionDocument<'a>>,
}

#[derive(Serialize)]
struct CommandDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aliases: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    permission: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    usage: Option<&'a str>,
}

#[derive(Serialize)]
struct PermissionDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<DefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a IndexMap<String, bool>>,
}

/// Permission defaults as the server expects them: booleans for
/// TRUE/FALSE, keywords for the operator variants.
#[derive(Serialize)]
#[serde(untagged)]
enum DefaultValue {
    Flag(bool),
    Keyword(&'static str),
}

impl From<PermissionDefault> for DefaultValue {
    fn from(value: PermissionDefault) -> Self {
        match value {
            PermissionDefault::True => DefaultValue::Flag(true),
            PermissionDefault::False => DefaultValue::Flag(false),
            PermissionDefault::Op => DefaultValue::Keyword("op"),
            PermissionDefault::NoOp => DefaultValue::Keyword("notop"),
        }
    }
}

impl<'a> DescriptorDocument<'a> {
    fn from_metadata(meta: &'a PluginMetadata) -> Result<Self, DescriptorError> {
        let name = meta.name().ok_or(DescriptorError::MissingName)?;

        let (author, authors) = match meta.authors() {
            [] => (None, None),
            [single] => (Some(single.as_str()), None),
            many => (None, Some(many)),
        };

        let dependency_list = |kind: DependencyType| {
            meta.has_dependencies()
                .then(|| meta.dependency_names(kind))
        };

        Ok(Self {
            name,
            version: non_empty(meta.version()),
            description: non_empty(meta.description()),
            load: meta.load_on(),
            author,
            authors,
            website: non_empty(meta.website()),
            main: non_empty(meta.main()),
            database: meta.database(),
            depend: dependency_list(DependencyType::Depend),
            softdepend: dependency_list(DependencyType::SoftDepend),
            loadbefore: dependency_list(DependencyType::LoadBefore),
            prefix: non_empty(meta.prefix()),
            commands: meta
                .commands()
                .map(|c| (c.name(), CommandDocument::from(c)))
                .collect(),
            permissions: meta
                .permissions()
                .map(|p| (p.name(), PermissionDocument::from(p)))
                .collect(),
        })
    }
}

impl<'a> From<&'a PluginCommand> for CommandDocument<'a> {
    fn from(command: &'a PluginCommand) -> Self {
        Self {
            description: non_empty(command.description()),
            aliases: Some(command.aliases()).filter(|a| !a.is_empty()),
            permission: non_empty(command.permission()),
            usage: non_empty(command.usage()),
        }
    }
}

impl<'a> From<&'a PluginPermission> for PermissionDocument<'a> {
    fn from(permission: &'a PluginPermission) -> Self {
        Self {
            description: non_empty(permission.description()),
            default: permission.default_value().map(DefaultValue::from),
            children: Some(permission.children()).filter(|c| !c.is_empty()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Encode metadata as a descriptor body, without the header.
///
/// # Errors
///
/// Returns `DescriptorError::MissingName` if the metadata has no name.
pub fn encode(meta: &PluginMetadata) -> Result<String, DescriptorError> {
    let document = DescriptorDocument::from_metadata(meta)?;
    serde_yaml::to_string(&document).map_err(|e| DescriptorError::EmitError(e.to_string()))
}

/// The comment header written before the descriptor body.
pub fn header() -> String {
    format!(
        "# Auto-generated yaml file, generated at {} by {} {}\n\n",
        chrono::Local::now().format(HEADER_TIME_FORMAT),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}

/// Write a complete descriptor (header and body) to `writer`.
///
/// The body is encoded before anything is written, so a metadata error
/// leaves the writer untouched.
pub fn write<W: Write>(mut writer: W, meta: &PluginMetadata) -> Result<(), DescriptorError> {
    let text = encode(meta)?;
    writer.write_all(header().as_bytes())?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a complete descriptor to the file at `path`, replacing it.
pub fn write_path(path: &Path, meta: &PluginMetadata) -> Result<(), DescriptorError> {
    let text = encode(meta)?;
    let write_error = |source| DescriptorError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(header().as_bytes()).map_err(write_error)?;
    writer.write_all(text.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    tracing::debug!(path = %path.display(), "wrote descriptor");
    Ok(())
}
