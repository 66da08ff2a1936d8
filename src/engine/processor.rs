//! engine::processor
//!
//! Merge and validation of one plugin class into descriptor metadata.
//!
//! # Lifecycle
//!
//! A [`MetadataProcessor`] is bound to one platform. It processes at most
//! one plugin class and is then finished:
//!
//! ```text
//! validate name -> base model -> main -> name pattern -> version/description
//!     -> dependencies -> platform settings -> finish
//! ```
//!
//! A missing or malformed name stops processing of the class; nothing is
//! written for it and a stale explicit output is removed on finish. Every
//! other problem is reported as a diagnostic and the offending item is
//! skipped.
//!
//! # Example
//!
//! ```
//! use plugmeta::core::declaration::{PluginClass, PluginDeclaration};
//! use plugmeta::core::types::Platform;
//! use plugmeta::engine::diagnostics::Diagnostics;
//! use plugmeta::engine::processor::MetadataProcessor;
//!
//! let class = PluginClass {
//!     qualified_name: "org.example.Example".to_string(),
//!     superclasses: vec![Platform::Spigot.base_class().to_string()],
//!     plugin: PluginDeclaration {
//!         name: "Example".to_string(),
//!         version: Some("1.0.0".to_string()),
//!         ..Default::default()
//!     },
//! };
//!
//! let mut diagnostics = Diagnostics::new();
//! let mut processor = MetadataProcessor::new(Platform::Spigot);
//! processor.process(&class, None, &mut diagnostics);
//!
//! let meta = processor.metadata().unwrap();
//! assert_eq!(meta.main(), Some("org.example.Example"));
//! assert_eq!(meta.version(), Some("1.0.0"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::ProcessorOptions;
use crate::core::declaration::{
    BungeeSettings, CommandDecl, PermissionDecl, PluginClass, PluginDeclaration, SpigotSettings,
};
use crate::core::descriptor;
use crate::core::metadata::{
    MetadataError, PluginCommand, PluginDependency, PluginMetadata, PluginPermission,
};
use crate::core::naming::{is_valid_plugin_name, NAME_PATTERN};
use crate::core::types::Platform;

use super::diagnostics::{Diagnostics, ErrorKind};

/// What finishing a processor did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishOutcome {
    /// The descriptor was written.
    Written(PathBuf),
    /// The class was rejected and a stale explicit output was deleted.
    Removed(PathBuf),
    /// Nothing was processed and there was nothing to clean up.
    Skipped,
    /// Writing failed; an `IoFailure` error was recorded.
    Failed(PathBuf),
}

/// Processes one plugin class for one platform.
#[derive(Debug, Clone)]
pub struct MetadataProcessor {
    platform: Platform,
    element: Option<String>,
    meta: Option<PluginMetadata>,
}

impl MetadataProcessor {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            element: None,
            meta: None,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether a class was processed successfully.
    pub fn is_processed(&self) -> bool {
        self.meta.is_some()
    }

    /// The merged metadata, once processed.
    pub fn metadata(&self) -> Option<&PluginMetadata> {
        self.meta.as_ref()
    }

    /// Merge the declaration of `class` into `base` (or a fresh model).
    ///
    /// Returns whether processing succeeded. On failure the processor stays
    /// unprocessed and the reason is recorded in `diagnostics`.
    pub fn process(
        &mut self,
        class: &PluginClass,
        base: Option<PluginMetadata>,
        diagnostics: &mut Diagnostics,
    ) -> bool {
        self.element = Some(class.qualified_name.clone());
        self.meta = None;

        let mut cx = Context {
            element: &class.qualified_name,
            diagnostics,
        };
        self.meta = build(class, base, &mut cx);

        tracing::debug!(
            platform = %self.platform,
            class = %class.qualified_name,
            processed = self.meta.is_some(),
            "processed plugin class"
        );
        self.meta.is_some()
    }

    /// Write the descriptor, or remove a stale explicit output.
    ///
    /// Write failures are recorded as `IoFailure` errors and only affect
    /// this platform.
    pub fn finish(&self, options: &ProcessorOptions, diagnostics: &mut Diagnostics) -> FinishOutcome {
        match &self.meta {
            Some(meta) => self.write(meta, &options.output_path(self.platform), diagnostics),
            None => match options.explicit_output(self.platform) {
                Some(output) => remove_stale(output),
                None => FinishOutcome::Skipped,
            },
        }
    }

    fn write(&self, meta: &PluginMetadata, output: &Path, diagnostics: &mut Diagnostics) -> FinishOutcome {
        let result = ensure_parent(output)
            .map_err(descriptor::DescriptorError::Io)
            .and_then(|()| descriptor::write_path(output, meta));

        match result {
            Ok(()) => {
                let note = diagnostics.note(format!(
                    "Writing {} plugin metadata to {}",
                    self.platform,
                    output.display()
                ));
                if let Some(element) = &self.element {
                    note.at(element.as_str());
                }
                FinishOutcome::Written(output.to_path_buf())
            }
            Err(err) => {
                let error = diagnostics.error(
                    ErrorKind::IoFailure,
                    format!("Failed to write plugin metadata: {}", err),
                );
                if let Some(element) = &self.element {
                    error.at(element.as_str());
                }
                FinishOutcome::Failed(output.to_path_buf())
            }
        }
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn remove_stale(output: &Path) -> FinishOutcome {
    match fs::remove_file(output) {
        Ok(()) => {
            tracing::info!(path = %output.display(), "removed stale descriptor");
            FinishOutcome::Removed(output.to_path_buf())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => FinishOutcome::Skipped,
        Err(err) => {
            tracing::warn!(path = %output.display(), %err, "failed to remove stale descriptor");
            FinishOutcome::Skipped
        }
    }
}

/// Diagnostics bound to the class being processed.
struct Context<'a> {
    element: &'a str,
    diagnostics: &'a mut Diagnostics,
}

impl Context<'_> {
    fn warning(&mut self, message: impl Into<String>) {
        self.diagnostics.warning(message).at(self.element);
    }

    fn error(&mut self, kind: ErrorKind, message: impl Into<String>, field: &str) {
        self.diagnostics
            .error(kind, message)
            .at(self.element)
            .field(field);
    }

    fn metadata_error(&mut self, err: &MetadataError, field: &str) {
        self.error(ErrorKind::from(err), err.to_string(), field);
    }
}

fn build(
    class: &PluginClass,
    base: Option<PluginMetadata>,
    cx: &mut Context<'_>,
) -> Option<PluginMetadata> {
    let plugin = &class.plugin;

    let name = plugin.name.as_str();
    if name.is_empty() {
        cx.error(ErrorKind::MissingField, "Plugin name cannot be empty", "name");
        return None;
    }

    let mut meta = base.unwrap_or_else(|| PluginMetadata::new(name));

    if let Err(err) = meta.set_main(class.qualified_name.as_str()) {
        cx.error(ErrorKind::MissingField, err.to_string(), "main");
        return None;
    }

    if !is_valid_plugin_name(name) {
        cx.error(
            ErrorKind::InvalidFormat,
            format!("Plugin name '{}' must match pattern '{}'.", name, NAME_PATTERN),
            "name",
        );
        return None;
    }
    if let Err(err) = meta.set_name(name) {
        cx.metadata_error(&err, "name");
        return None;
    }

    merge_common(plugin, &mut meta, cx);

    if let Some(spigot) = &plugin.spigot {
        if class.belongs_to(Platform::Spigot) {
            merge_spigot(spigot, &mut meta, cx);
        }
    }
    if let Some(bungee) = &plugin.bungee {
        if class.belongs_to(Platform::Bungee) {
            merge_bungee(bungee, &mut meta, cx);
        }
    }

    Some(meta)
}

/// Set a declared string, or warn when neither side has one.
macro_rules! merge_string {
    ($cx:expr, $meta:expr, $declared:expr, $get:ident, $set:ident, $warning:expr) => {
        match $declared.as_deref().filter(|v| !v.is_empty()) {
            Some(value) => $meta.$set(value),
            None => {
                if $meta.$get().map_or(true, str::is_empty) {
                    $cx.warning($warning);
                }
            }
        }
    };
}

fn merge_common(plugin: &PluginDeclaration, meta: &mut PluginMetadata, cx: &mut Context<'_>) {
    merge_string!(cx, meta, plugin.version, version, set_version, "Missing plugin version.");
    merge_string!(
        cx,
        meta,
        plugin.description,
        description,
        set_description,
        "Missing plugin description."
    );

    for dependency in &plugin.dependencies {
        match PluginDependency::new(dependency.name.as_str(), dependency.kind) {
            Ok(dep) => {
                meta.replace_dependency(dep);
            }
            Err(_) => cx.error(
                ErrorKind::EmptyValue,
                "Dependency name should not be empty.",
                "dependencies.name",
            ),
        }
    }
}

fn merge_spigot(spigot: &SpigotSettings, meta: &mut PluginMetadata, cx: &mut Context<'_>) {
    if let Some(load) = spigot.load {
        meta.set_load_on(load);
    }

    if !spigot.authors.is_empty() {
        meta.clear_authors();
        for author in &spigot.authors {
            if author.is_empty() {
                cx.error(
                    ErrorKind::EmptyValue,
                    "Empty author is not allowed",
                    "spigot.authors",
                );
                continue;
            }
            if let Err(err) = meta.add_author(author.as_str()) {
                cx.metadata_error(&err, "spigot.authors");
            }
        }
    }

    merge_string!(cx, meta, spigot.website, website, set_website, "Missing plugin website");

    if let Some(database) = spigot.database {
        meta.set_database(database);
    }

    merge_string!(cx, meta, spigot.prefix, prefix, set_prefix, "Missing plugin prefix");

    let mut seen = HashSet::new();
    for decl in &spigot.commands {
        if !seen.insert(decl.name.as_str()) {
            cx.error(
                ErrorKind::DuplicateKey,
                format!("Command '{}' is declared more than once", decl.name),
                "spigot.commands.name",
            );
            continue;
        }
        if let Some(command) = build_command(decl, cx) {
            meta.replace_command(command);
        }
    }

    let mut seen = HashSet::new();
    for decl in &spigot.permissions {
        if !seen.insert(decl.name.as_str()) {
            cx.error(
                ErrorKind::DuplicateKey,
                format!("Permission '{}' is declared more than once", decl.name),
                "spigot.permissions.name",
            );
            continue;
        }
        if let Some(permission) = build_permission(decl, cx) {
            meta.replace_permission(permission);
        }
    }
}

fn build_command(decl: &CommandDecl, cx: &mut Context<'_>) -> Option<PluginCommand> {
    let mut command = match PluginCommand::new(decl.name.as_str()) {
        Ok(command) => command,
        Err(err) => {
            cx.metadata_error(&err, "spigot.commands.name");
            return None;
        }
    };

    if let Some(description) = &decl.description {
        command.set_description(description.as_str());
    }
    for alias in &decl.aliases {
        if let Err(err) = command.add_alias(alias.as_str()) {
            cx.metadata_error(&err, "spigot.commands.aliases");
        }
    }
    if let Some(permission) = &decl.permission {
        command.set_permission(permission.as_str());
    }
    if let Some(usage) = &decl.usage {
        command.set_usage(usage.as_str());
    }

    Some(command)
}

fn build_permission(decl: &PermissionDecl, cx: &mut Context<'_>) -> Option<PluginPermission> {
    let mut permission = match PluginPermission::new(decl.name.as_str()) {
        Ok(permission) => permission,
        Err(err) => {
            cx.metadata_error(&err, "spigot.permissions.name");
            return None;
        }
    };

    if let Some(description) = &decl.description {
        permission.set_description(description.as_str());
    }
    if let Some(default) = decl.default {
        permission.set_default(default);
    }
    for child in &decl.children {
        if let Err(err) = permission.add_child(child.name.as_str(), child.value) {
            cx.metadata_error(&err, "spigot.permissions.children");
        }
    }

    Some(permission)
}

fn merge_bungee(bungee: &BungeeSettings, meta: &mut PluginMetadata, cx: &mut Context<'_>) {
    match bungee.author.as_deref().filter(|a| !a.is_empty()) {
        Some(author) => {
            meta.clear_authors();
            if let Err(err) = meta.add_author(author) {
                cx.metadata_error(&err, "bungee.author");
            }
        }
        None => cx.error(
            ErrorKind::EmptyValue,
            "Empty author is not allowed",
            "bungee.author",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::declaration::{ChildDecl, DependencyDecl};
    use crate::core::types::{DependencyType, LoadOn, PermissionDefault};
    use crate::engine::diagnostics::Severity;

    fn spigot_class(plugin: PluginDeclaration) -> PluginClass {
        PluginClass {
            qualified_name: "org.example.Example".to_string(),
            superclasses: vec![Platform::Spigot.base_class().to_string()],
            plugin,
        }
    }

    fn bungee_class(plugin: PluginDeclaration) -> PluginClass {
        PluginClass {
            qualified_name: "org.example.Proxy".to_string(),
            superclasses: vec![
                "org.example.Base".to_string(),
                Platform::Bungee.base_class().to_string(),
            ],
            plugin,
        }
    }

    fn named(name: &str) -> PluginDeclaration {
        PluginDeclaration {
            name: name.to_string(),
            version: Some("1.0".to_string()),
            description: Some("An example".to_string()),
            ..Default::default()
        }
    }

    fn process(class: &PluginClass, base: Option<PluginMetadata>) -> (MetadataProcessor, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let mut processor = MetadataProcessor::new(Platform::Spigot);
        processor.process(class, base, &mut diagnostics);
        (processor, diagnostics)
    }

    mod validation {
        use super::*;

        #[test]
        fn empty_name_is_missing_field() {
            let (processor, diagnostics) = process(&spigot_class(named("")), None);
            assert!(!processor.is_processed());
            let error = diagnostics.errors_of(ErrorKind::MissingField).next().unwrap();
            assert_eq!(error.field.as_deref(), Some("name"));
            assert_eq!(error.element.as_deref(), Some("org.example.Example"));
        }

        #[test]
        fn pattern_mismatch_is_invalid_format() {
            let (processor, diagnostics) = process(&spigot_class(named("has space")), None);
            assert!(!processor.is_processed());
            assert_eq!(diagnostics.errors_of(ErrorKind::InvalidFormat).count(), 1);
        }

        #[test]
        fn overlong_name_is_invalid_format() {
            let name = "a".repeat(64);
            let (processor, _) = process(&spigot_class(named(&name)), None);
            assert!(!processor.is_processed());
        }

        #[test]
        fn valid_name_sets_name_and_main() {
            let (processor, diagnostics) = process(&spigot_class(named("Example_1-x")), None);
            let meta = processor.metadata().unwrap();
            assert_eq!(meta.name(), Some("Example_1-x"));
            assert_eq!(meta.main(), Some("org.example.Example"));
            assert!(diagnostics.is_empty());
        }
    }

    mod merging {
        use super::*;

        #[test]
        fn base_model_is_used_and_main_overwritten() {
            let mut base = PluginMetadata::new("Base");
            base.set_main("org.example.Old").unwrap();
            base.set_website("https://example.org");

            let (processor, _) = process(&spigot_class(named("Example")), Some(base));
            let meta = processor.metadata().unwrap();
            assert_eq!(meta.name(), Some("Example"));
            assert_eq!(meta.main(), Some("org.example.Example"));
            assert_eq!(meta.website(), Some("https://example.org"));
        }

        #[test]
        fn missing_version_warns_only_when_base_lacks_it() {
            let mut plugin = named("Example");
            plugin.version = None;

            let (_, diagnostics) = process(&spigot_class(plugin.clone()), None);
            assert_eq!(diagnostics.count(Severity::Warning), 1);

            let mut base = PluginMetadata::new("Example");
            base.set_version("2.0");
            let (processor, diagnostics) = process(&spigot_class(plugin), Some(base));
            assert_eq!(diagnostics.count(Severity::Warning), 0);
            assert_eq!(processor.metadata().unwrap().version(), Some("2.0"));
        }

        #[test]
        fn empty_declared_string_counts_as_absent() {
            let mut plugin = named("Example");
            plugin.description = Some(String::new());
            let (processor, diagnostics) = process(&spigot_class(plugin), None);
            assert_eq!(processor.metadata().unwrap().description(), None);
            assert_eq!(diagnostics.count(Severity::Warning), 1);
        }

        #[test]
        fn dependencies_are_upserted_and_empty_names_reported() {
            let mut base = PluginMetadata::new("Example");
            base.add_dependency(PluginDependency::depend("Vault").unwrap())
                .unwrap();

            let mut plugin = named("Example");
            plugin.dependencies = vec![
                DependencyDecl {
                    name: "Vault".to_string(),
                    kind: DependencyType::SoftDepend,
                },
                DependencyDecl {
                    name: String::new(),
                    kind: DependencyType::Depend,
                },
                DependencyDecl {
                    name: "WorldEdit".to_string(),
                    kind: DependencyType::LoadBefore,
                },
            ];

            let (processor, diagnostics) = process(&spigot_class(plugin), Some(base));
            let meta = processor.metadata().unwrap();
            assert_eq!(
                meta.dependency("Vault").map(|d| d.kind()),
                Some(DependencyType::SoftDepend)
            );
            assert!(meta.dependency("WorldEdit").is_some());
            assert!(processor.is_processed());

            let error = diagnostics.errors_of(ErrorKind::EmptyValue).next().unwrap();
            assert_eq!(error.field.as_deref(), Some("dependencies.name"));
        }
    }

    mod spigot {
        use super::*;

        fn with_spigot(settings: SpigotSettings) -> PluginClass {
            let mut plugin = named("Example");
            plugin.spigot = Some(settings);
            spigot_class(plugin)
        }

        #[test]
        fn settings_are_merged() {
            let settings = SpigotSettings {
                load: Some(LoadOn::Startup),
                authors: vec!["Zartec".to_string(), "ghac".to_string()],
                website: Some("https://example.org".to_string()),
                database: Some(true),
                prefix: Some("EX".to_string()),
                commands: vec![CommandDecl {
                    name: "example".to_string(),
                    aliases: vec!["ex".to_string()],
                    ..Default::default()
                }],
                permissions: vec![PermissionDecl {
                    name: "example.*".to_string(),
                    default: Some(PermissionDefault::Op),
                    children: vec![ChildDecl {
                        name: "example.use".to_string(),
                        value: true,
                    }],
                    ..Default::default()
                }],
            };

            let (processor, diagnostics) = process(&with_spigot(settings), None);
            let meta = processor.metadata().unwrap();
            assert_eq!(meta.load_on(), Some(LoadOn::Startup));
            assert_eq!(meta.authors(), ["Zartec", "ghac"]);
            assert_eq!(meta.website(), Some("https://example.org"));
            assert_eq!(meta.database(), Some(true));
            assert_eq!(meta.prefix(), Some("EX"));
            assert_eq!(meta.command("example").unwrap().aliases(), ["ex"]);
            assert_eq!(
                meta.permission("example.*").unwrap().default_value(),
                Some(PermissionDefault::Op)
            );
            assert!(diagnostics.is_empty());
        }

        #[test]
        fn declared_authors_replace_base_authors() {
            let mut base = PluginMetadata::new("Example");
            base.add_author("old").unwrap();
            let settings = SpigotSettings {
                authors: vec!["new".to_string(), String::new()],
                ..Default::default()
            };

            let (processor, diagnostics) = process(&with_spigot(settings), Some(base));
            assert_eq!(processor.metadata().unwrap().authors(), ["new"]);
            let error = diagnostics.errors_of(ErrorKind::EmptyValue).next().unwrap();
            assert_eq!(error.field.as_deref(), Some("spigot.authors"));
        }

        #[test]
        fn no_declared_authors_keeps_base_authors() {
            let mut base = PluginMetadata::new("Example");
            base.add_author("old").unwrap();
            let (processor, _) = process(&with_spigot(SpigotSettings::default()), Some(base));
            assert_eq!(processor.metadata().unwrap().authors(), ["old"]);
        }

        #[test]
        fn missing_website_and_prefix_warn() {
            let (_, diagnostics) = process(&with_spigot(SpigotSettings::default()), None);
            let warnings: Vec<_> = diagnostics
                .iter()
                .filter(|d| d.severity == Severity::Warning)
                .map(|d| d.message.as_str())
                .collect();
            assert_eq!(warnings, ["Missing plugin website", "Missing plugin prefix"]);
        }

        #[test]
        fn duplicate_aliases_and_commands_are_reported() {
            let settings = SpigotSettings {
                commands: vec![
                    CommandDecl {
                        name: "example".to_string(),
                        aliases: vec!["ex".to_string(), "ex".to_string()],
                        ..Default::default()
                    },
                    CommandDecl {
                        name: "example".to_string(),
                        description: Some("second".to_string()),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            };

            let (processor, diagnostics) = process(&with_spigot(settings), None);
            let command = processor.metadata().unwrap().command("example").unwrap();
            assert_eq!(command.aliases(), ["ex"]);
            assert_eq!(command.description(), None);
            assert_eq!(diagnostics.errors_of(ErrorKind::DuplicateKey).count(), 2);
        }

        #[test]
        fn spigot_settings_ignored_for_bungee_class() {
            let mut plugin = named("Example");
            plugin.spigot = Some(SpigotSettings {
                prefix: Some("EX".to_string()),
                ..Default::default()
            });
            let (processor, _) = process(&bungee_class(plugin), None);
            assert_eq!(processor.metadata().unwrap().prefix(), None);
        }
    }

    mod bungee {
        use super::*;

        fn with_author(author: Option<&str>) -> PluginClass {
            let mut plugin = named("Proxy");
            plugin.bungee = Some(BungeeSettings {
                author: author.map(str::to_string),
            });
            bungee_class(plugin)
        }

        #[test]
        fn author_replaces_authors() {
            let mut base = PluginMetadata::new("Proxy");
            base.add_author("a").unwrap();
            base.add_author("b").unwrap();
            let (processor, diagnostics) = process(&with_author(Some("Zartec")), Some(base));
            assert_eq!(processor.metadata().unwrap().authors(), ["Zartec"]);
            assert!(!diagnostics.has_errors());
        }

        #[test]
        fn empty_author_is_an_error() {
            let (processor, diagnostics) = process(&with_author(None), None);
            assert!(processor.is_processed());
            let error = diagnostics.errors_of(ErrorKind::EmptyValue).next().unwrap();
            assert_eq!(error.field.as_deref(), Some("bungee.author"));
        }
    }

    mod finish {
        use super::*;

        fn options_in(dir: &Path) -> ProcessorOptions {
            ProcessorOptions {
                resource_dir: dir.to_path_buf(),
                ..Default::default()
            }
        }

        #[test]
        fn writes_to_resource_dir() {
            let dir = tempfile::tempdir().unwrap();
            let (processor, mut diagnostics) = process(&spigot_class(named("Example")), None);

            let outcome = processor.finish(&options_in(dir.path()), &mut diagnostics);
            let path = dir.path().join("plugin.yml");
            assert_eq!(outcome, FinishOutcome::Written(path.clone()));

            let text = fs::read_to_string(&path).unwrap();
            assert!(descriptor::body(&text).starts_with("name: Example\n"));
            assert_eq!(diagnostics.count(Severity::Note), 1);
        }

        #[test]
        fn creates_missing_parent_directories() {
            let dir = tempfile::tempdir().unwrap();
            let (processor, mut diagnostics) = process(&spigot_class(named("Example")), None);
            let options = options_in(&dir.path().join("build/resources"));

            let outcome = processor.finish(&options, &mut diagnostics);
            assert!(matches!(outcome, FinishOutcome::Written(_)));
            assert!(dir.path().join("build/resources/plugin.yml").exists());
        }

        #[test]
        fn rejected_class_removes_stale_explicit_output() {
            let dir = tempfile::tempdir().unwrap();
            let stale = dir.path().join("out.yml");
            fs::write(&stale, "name: Old\n").unwrap();

            let mut options = options_in(dir.path());
            options.spigot.output = Some(stale.clone());

            let (processor, mut diagnostics) = process(&spigot_class(named("bad name")), None);
            let outcome = processor.finish(&options, &mut diagnostics);
            assert_eq!(outcome, FinishOutcome::Removed(stale.clone()));
            assert!(!stale.exists());
        }

        #[test]
        fn unprocessed_without_explicit_output_is_skipped() {
            let dir = tempfile::tempdir().unwrap();
            let processor = MetadataProcessor::new(Platform::Bungee);
            let mut diagnostics = Diagnostics::new();
            assert_eq!(
                processor.finish(&options_in(dir.path()), &mut diagnostics),
                FinishOutcome::Skipped
            );
            assert!(diagnostics.is_empty());
        }

        #[test]
        fn write_failure_is_io_failure() {
            let dir = tempfile::tempdir().unwrap();
            let mut options = options_in(dir.path());
            // A directory cannot be opened as a file.
            options.spigot.output = Some(dir.path().to_path_buf());

            let (processor, mut diagnostics) = process(&spigot_class(named("Example")), None);
            let outcome = processor.finish(&options, &mut diagnostics);
            assert!(matches!(outcome, FinishOutcome::Failed(_)));
            assert_eq!(diagnostics.errors_of(ErrorKind::IoFailure).count(), 1);
        }
    }
}
