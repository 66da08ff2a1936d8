//! merge command - Merge descriptors in order

use std::path::{Path, PathBuf};

use crate::cli::Context;
use crate::core::descriptor;
use crate::core::metadata::PluginMetadata;
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Merge `files` in order and write the result with a header.
///
/// Files without metadata are skipped with a warning.
pub fn merge(ctx: &Context, files: &[PathBuf], target: Option<&Path>) -> Result<()> {
    let mut merged: Option<PluginMetadata> = None;

    for path in files {
        let Some(meta) = descriptor::read_path(path)? else {
            output::warn(
                format!("No plugin metadata in {}, skipping", path.display()),
                ctx.verbosity,
            );
            continue;
        };

        merged = Some(match merged.take() {
            Some(mut base) => {
                base.accept(&meta);
                base
            }
            None => meta,
        });
        output::debug(format!("Merged {}", path.display()), ctx.verbosity);
    }

    let Some(merged) = merged else {
        bail!("None of the given files contain plugin metadata");
    };

    match target {
        Some(path) => {
            descriptor::write_path(path, &merged)?;
            output::print(format!("Wrote {}", path.display()), ctx.verbosity);
        }
        None => {
            descriptor::write(std::io::stdout().lock(), &merged)
                .context("Failed to write merged descriptor")?;
        }
    }

    Ok(())
}
