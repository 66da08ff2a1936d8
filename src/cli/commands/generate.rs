//! generate command - Run a generation pass over a declaration file

use crate::cli::args::GenerateArgs;
use crate::cli::Context;
use crate::core::config::{Config, ProcessorOptions};
use crate::core::types::Platform;
use crate::engine::diagnostics::Severity;
use crate::engine::generator::Generator;
use crate::engine::processor::FinishOutcome;
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Resolve options from config file, processor options and flags.
pub fn resolve_options(args: &GenerateArgs) -> Result<ProcessorOptions> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut options = ProcessorOptions::from_config(&config);
    for option in &args.options {
        options
            .apply_assignment(option)
            .with_context(|| format!("Invalid processor option '{}'", option))?;
    }

    if !args.spigot_base.is_empty() {
        options.spigot.extra_files = args.spigot_base.clone();
    }
    if !args.bungee_base.is_empty() {
        options.bungee.extra_files = args.bungee_base.clone();
    }
    if let Some(output) = &args.spigot_output {
        options.spigot.output = Some(output.clone());
    }
    if let Some(output) = &args.bungee_output {
        options.bungee.output = Some(output.clone());
    }
    if let Some(dir) = &args.resource_dir {
        options.resource_dir = dir.clone();
    }

    Ok(options)
}

/// Generate descriptors for the declarations in `args.declarations`.
pub fn generate(ctx: &Context, args: &GenerateArgs) -> Result<()> {
    let options = resolve_options(args)?;
    output::debug(
        format!("Resource directory: {}", options.resource_dir.display()),
        ctx.verbosity,
    );
    for platform in Platform::ALL {
        let files: Vec<_> = options
            .platform(platform)
            .extra_files
            .iter()
            .map(|p| p.display())
            .collect();
        if !files.is_empty() {
            output::debug(
                format!("{} base files:\n{}", platform, output::format_list(&files, "  - ")),
                ctx.verbosity,
            );
        }
    }

    let report = Generator::new(options)
        .run_file(&args.declarations)
        .with_context(|| {
            format!(
                "Failed to generate descriptors from '{}'",
                args.declarations.display()
            )
        })?;

    for diagnostic in &report.diagnostics {
        output::diagnostic(diagnostic, ctx.verbosity);
    }
    for (platform, outcome) in &report.outcomes {
        if let FinishOutcome::Removed(path) = outcome {
            output::warn(
                format!("Removed stale {} descriptor {}", platform, path.display()),
                ctx.verbosity,
            );
        }
    }

    if !report.is_success() {
        bail!(
            "Descriptor generation failed ({})",
            output::format_summary(
                report.diagnostics.count(Severity::Error),
                report.diagnostics.count(Severity::Warning)
            )
        );
    }

    Ok(())
}
