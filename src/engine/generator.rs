//! engine::generator
//!
//! One generation pass over a declaration set.
//!
//! # Flow
//!
//! 1. Load the base model of every platform from its extra files, merging
//!    them in order. A file without metadata is skipped with a warning; a
//!    file that cannot be read or parsed aborts the pass.
//! 2. Reject classes that extend no available platform base class.
//! 3. Assign classes to platforms. Each platform processes exactly one
//!    class; a platform claimed by several classes is skipped with an
//!    error.
//! 4. Finish every platform independently (write, or remove a stale
//!    explicit output).
//!
//! Validation problems never abort the pass; they are collected in the
//! returned [`GenerateReport`].

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::config::ProcessorOptions;
use crate::core::declaration::{DeclarationError, DeclarationSet, PluginClass};
use crate::core::descriptor::{self, DescriptorError};
use crate::core::metadata::PluginMetadata;
use crate::core::types::Platform;

use super::diagnostics::{Diagnostics, ErrorKind};
use super::processor::{FinishOutcome, MetadataProcessor};

/// Errors that abort a generation pass.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read extra plugin metadata from '{path}'")]
    BaseModel {
        path: PathBuf,
        #[source]
        source: DescriptorError,
    },

    #[error(transparent)]
    Declarations(#[from] DeclarationError),
}

/// Result of a completed pass.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub diagnostics: Diagnostics,
    pub outcomes: Vec<(Platform, FinishOutcome)>,
}

impl GenerateReport {
    /// Whether the pass produced no error diagnostics.
    pub fn is_success(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// What finishing `platform` did.
    pub fn outcome(&self, platform: Platform) -> Option<&FinishOutcome> {
        self.outcomes
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, outcome)| outcome)
    }
}

/// Runs generation passes with fixed options.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: ProcessorOptions,
}

impl Generator {
    pub fn new(options: ProcessorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Load declarations from `path` and run a pass over them.
    pub fn run_file(&self, path: &Path) -> Result<GenerateReport, GenerateError> {
        let set = DeclarationSet::load(path)?;
        self.run(&set)
    }

    /// Run a pass over `set`.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::BaseModel` if an extra metadata file cannot be
    /// read or parsed. Nothing is written in that case.
    pub fn run(&self, set: &DeclarationSet) -> Result<GenerateReport, GenerateError> {
        let mut report = GenerateReport::default();

        let mut bases = Vec::with_capacity(Platform::ALL.len());
        for platform in Platform::ALL {
            bases.push(self.load_base(platform, &mut report.diagnostics)?);
        }

        let mut processors: Vec<MetadataProcessor> = Platform::ALL
            .into_iter()
            .map(MetadataProcessor::new)
            .collect();

        let available: Vec<Platform> = Platform::ALL
            .into_iter()
            .filter(|p| set.is_available(*p))
            .collect();

        if available.is_empty() {
            report.diagnostics.note(format!(
                "{} not available. Not processing anything.",
                base_class_list(&Platform::ALL)
            ));
        } else {
            let classes = accepted_classes(set, &available, &mut report.diagnostics);
            if classes.len() > 2 {
                let names: Vec<&str> = classes.iter().map(|c| c.simple_name()).collect();
                report.diagnostics.error(
                    ErrorKind::InvalidDeclaration,
                    format!("More than two plugin classes declared: [{}]", names.join(", ")),
                );
            }

            if !classes.is_empty() {
                for ((processor, base), platform) in
                    processors.iter_mut().zip(&bases).zip(Platform::ALL)
                {
                    if !available.contains(&platform) {
                        report.diagnostics.note(format!(
                            "{} not available. Not processing it.",
                            platform.base_class()
                        ));
                        continue;
                    }
                    assign(processor, base.as_ref(), &classes, &mut report.diagnostics);
                }
            }
        }

        for processor in &processors {
            let outcome = processor.finish(&self.options, &mut report.diagnostics);
            tracing::debug!(platform = %processor.platform(), ?outcome, "finished platform");
            report.outcomes.push((processor.platform(), outcome));
        }

        Ok(report)
    }

    /// Merge the extra metadata files of `platform` in order.
    ///
    /// The first file with metadata becomes the base; later ones are merged
    /// into it.
    pub fn load_base(
        &self,
        platform: Platform,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<PluginMetadata>, GenerateError> {
        let mut base: Option<PluginMetadata> = None;

        for path in &self.options.platform(platform).extra_files {
            let meta = descriptor::read_path(path).map_err(|source| GenerateError::BaseModel {
                path: path.clone(),
                source,
            })?;

            let Some(meta) = meta else {
                diagnostics.warning(format!(
                    "No plugin metadata found in {}, skipping",
                    path.display()
                ));
                continue;
            };

            base = Some(match base.take() {
                Some(mut merged) => {
                    merged.accept(&meta);
                    merged
                }
                None => meta,
            });
            tracing::debug!(%platform, path = %path.display(), "loaded extra metadata");
        }

        Ok(base)
    }
}

/// Classes extending at least one available platform base class.
fn accepted_classes<'a>(
    set: &'a DeclarationSet,
    available: &[Platform],
    diagnostics: &mut Diagnostics,
) -> Vec<&'a PluginClass> {
    set.classes
        .iter()
        .filter(|class| {
            let accepted = available.iter().any(|p| class.belongs_to(*p));
            if !accepted {
                diagnostics
                    .error(
                        ErrorKind::InvalidDeclaration,
                        format!("Plugin class not extending {}", base_class_list(available)),
                    )
                    .at(class.qualified_name.as_str());
            }
            accepted
        })
        .collect()
}

/// Process the single class of the processor's platform, if unambiguous.
fn assign(
    processor: &mut MetadataProcessor,
    base: Option<&PluginMetadata>,
    classes: &[&PluginClass],
    diagnostics: &mut Diagnostics,
) {
    let platform = processor.platform();
    let matching: Vec<&PluginClass> = classes
        .iter()
        .copied()
        .filter(|c| c.belongs_to(platform))
        .collect();

    match matching.as_slice() {
        [] => {}
        [class] => {
            processor.process(class, base.cloned(), diagnostics);
        }
        _ => {
            diagnostics.error(
                ErrorKind::InvalidDeclaration,
                format!(
                    "Multiple plugin classes are of type {}; not generating {}",
                    platform.base_class(),
                    platform.default_filename()
                ),
            );
        }
    }
}

fn base_class_list(platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(|p| p.base_class())
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::declaration::{BungeeSettings, PluginDeclaration};
    use crate::engine::diagnostics::Severity;
    use std::fs;

    fn class(qualified_name: &str, platform: Platform, name: &str) -> PluginClass {
        PluginClass {
            qualified_name: qualified_name.to_string(),
            superclasses: vec![platform.base_class().to_string()],
            plugin: PluginDeclaration {
                name: name.to_string(),
                version: Some("1.0".to_string()),
                description: Some("Example".to_string()),
                bungee: (platform == Platform::Bungee).then(|| BungeeSettings {
                    author: Some("Zartec".to_string()),
                }),
                ..Default::default()
            },
        }
    }

    fn generator_in(dir: &Path) -> Generator {
        Generator::new(ProcessorOptions {
            resource_dir: dir.to_path_buf(),
            ..Default::default()
        })
    }

    #[test]
    fn one_class_per_platform() {
        let dir = tempfile::tempdir().unwrap();
        let set = DeclarationSet {
            classes: vec![
                class("org.example.Spigot", Platform::Spigot, "Example"),
                class("org.example.Bungee", Platform::Bungee, "ExampleProxy"),
            ],
            ..Default::default()
        };

        let report = generator_in(dir.path()).run(&set).unwrap();
        assert!(report.is_success());
        assert!(matches!(
            report.outcome(Platform::Spigot),
            Some(FinishOutcome::Written(_))
        ));
        let bungee = fs::read_to_string(dir.path().join("bungee.yml")).unwrap();
        assert!(descriptor::body(&bungee).contains("author: Zartec\n"));
    }

    #[test]
    fn no_platform_available_is_a_note() {
        let dir = tempfile::tempdir().unwrap();
        let set = DeclarationSet {
            platforms: Vec::new(),
            classes: vec![class("org.example.Spigot", Platform::Spigot, "Example")],
        };

        let report = generator_in(dir.path()).run(&set).unwrap();
        assert!(report.is_success());
        assert_eq!(report.diagnostics.count(Severity::Note), 1);
        assert!(!dir.path().join("plugin.yml").exists());
    }

    #[test]
    fn unrelated_class_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut stray = class("org.example.Stray", Platform::Spigot, "Stray");
        stray.superclasses = vec!["java.lang.Object".to_string()];
        let set = DeclarationSet {
            classes: vec![stray],
            ..Default::default()
        };

        let report = generator_in(dir.path()).run(&set).unwrap();
        assert!(!report.is_success());
        let error = report
            .diagnostics
            .errors_of(ErrorKind::InvalidDeclaration)
            .next()
            .unwrap();
        assert_eq!(error.element.as_deref(), Some("org.example.Stray"));
    }

    #[test]
    fn two_classes_of_one_platform_skip_it() {
        let dir = tempfile::tempdir().unwrap();
        let set = DeclarationSet {
            classes: vec![
                class("org.example.A", Platform::Spigot, "A"),
                class("org.example.B", Platform::Spigot, "B"),
            ],
            ..Default::default()
        };

        let report = generator_in(dir.path()).run(&set).unwrap();
        assert!(!report.is_success());
        assert_eq!(report.outcome(Platform::Spigot), Some(&FinishOutcome::Skipped));
        assert!(!dir.path().join("plugin.yml").exists());
    }

    #[test]
    fn unavailable_platform_is_not_processed() {
        let dir = tempfile::tempdir().unwrap();
        let set = DeclarationSet {
            platforms: vec![Platform::Bungee],
            classes: vec![class("org.example.Bungee", Platform::Bungee, "Proxy")],
        };

        let report = generator_in(dir.path()).run(&set).unwrap();
        assert!(report.is_success());
        assert!(dir.path().join("bungee.yml").exists());
        assert!(!dir.path().join("plugin.yml").exists());
    }

    #[test]
    fn base_files_are_merged_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.yml");
        let second = dir.path().join("second.yml");
        let empty = dir.path().join("empty.yml");
        fs::write(&first, "name: Base\nwebsite: first\nprefix: P\n").unwrap();
        fs::write(&second, "name: Base\nwebsite: second\n").unwrap();
        fs::write(&empty, "# nothing here\n").unwrap();

        let mut generator = generator_in(dir.path());
        generator.options.spigot.extra_files = vec![first, empty, second];

        let mut diagnostics = Diagnostics::new();
        let base = generator
            .load_base(Platform::Spigot, &mut diagnostics)
            .unwrap()
            .unwrap();
        assert_eq!(base.website(), Some("second"));
        assert_eq!(base.prefix(), Some("P"));
        assert_eq!(diagnostics.count(Severity::Warning), 1);
    }

    #[test]
    fn unreadable_base_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mut generator = generator_in(dir.path());
        generator.options.bungee.extra_files = vec![dir.path().join("missing.yml")];

        let set = DeclarationSet {
            classes: vec![class("org.example.Bungee", Platform::Bungee, "Proxy")],
            ..Default::default()
        };
        assert!(matches!(
            generator.run(&set),
            Err(GenerateError::BaseModel { .. })
        ));
        assert!(!dir.path().join("bungee.yml").exists());
    }
}
