//! show command - Print the canonical form of a descriptor

use std::path::Path;

use crate::cli::Context;
use crate::core::descriptor;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Read `path` and print its body as plugmeta would write it.
pub fn show(ctx: &Context, path: &Path) -> Result<()> {
    let meta = descriptor::read_path(path)?;

    match meta {
        Some(meta) => {
            let text = descriptor::encode(&meta)
                .with_context(|| format!("Failed to encode '{}'", path.display()))?;
            print!("{}", text);
        }
        None => output::note(
            format!("No plugin metadata in {}", path.display()),
            ctx.verbosity,
        ),
    }

    Ok(())
}
