//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves command-specific arguments
//! 2. Calls the library to do the work
//! 3. Formats and displays output
//!
//! Handlers return `anyhow::Result`; a failed run is reported by `main`
//! and exits non-zero.

mod completion;
mod generate;
mod merge;
mod show;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use generate::{generate, resolve_options};
pub use merge::merge;
pub use show::show;

use super::args::Command;
use super::Context;
use anyhow::Result;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Generate(args) => generate::generate(ctx, &args),
        Command::Show { descriptor } => show::show(ctx, &descriptor),
        Command::Merge { files, output } => merge::merge(ctx, &files, output.as_deref()),
        Command::Completion { shell } => completion::completion(shell),
    }
}
