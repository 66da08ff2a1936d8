//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Errors only

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// plugmeta - Generate plugin.yml and bungee.yml descriptors
#[derive(Parser, Debug)]
#[command(name = "plugmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate descriptors from plugin declarations
    #[command(
        name = "generate",
        long_about = "Generate descriptors from plugin declarations.\n\n\
            Reads the declaration file produced by the metadata extractor, merges \
            every declared plugin class with the configured base descriptors and \
            writes plugin.yml and/or bungee.yml.\n\n\
            Options are resolved from plugmeta.toml (or $PLUGMETA_CONFIG), then \
            -A key=value processor options, then the flags below.",
        after_help = "\
EXAMPLES:
    # Generate into build/resources/main
    plugmeta generate -d build/plugin-declarations.json --resource-dir build/resources/main

    # Merge a hand-written base file into the generated plugin.yml
    plugmeta generate -d decl.yml --spigot-base src/main/resources/base.yml

    # Processor options, as passed by a build tool
    plugmeta generate -d decl.yml -A metaOutputFileBungee=out/bungee.yml"
    )]
    Generate(GenerateArgs),

    /// Print the canonical form of a descriptor
    #[command(name = "show")]
    Show {
        /// Descriptor file to read
        descriptor: PathBuf,
    },

    /// Merge descriptors in order; later files override earlier ones
    #[command(name = "merge")]
    Merge {
        /// Descriptor files, lowest precedence first
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write the merged descriptor here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash
    plugmeta completion bash > /etc/bash_completion.d/plugmeta

    # Zsh
    plugmeta completion zsh > \"${fpath[1]}/_plugmeta\"

    # Fish
    plugmeta completion fish > ~/.config/fish/completions/plugmeta.fish

    # PowerShell
    plugmeta completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments of `plugmeta generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Declaration file (.json, .toml, .yml or .yaml)
    #[arg(short, long, value_name = "FILE")]
    pub declarations: PathBuf,

    /// Config file to use instead of plugmeta.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Processor option, e.g. -A extraMetaFilesSpigot=a.yml;b.yml
    #[arg(short = 'A', value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Base descriptor merged into plugin.yml (repeatable)
    #[arg(long, value_name = "FILE")]
    pub spigot_base: Vec<PathBuf>,

    /// Base descriptor merged into bungee.yml (repeatable)
    #[arg(long, value_name = "FILE")]
    pub bungee_base: Vec<PathBuf>,

    /// Explicit plugin.yml output path
    #[arg(long, value_name = "FILE")]
    pub spigot_output: Option<PathBuf>,

    /// Explicit bungee.yml output path
    #[arg(long, value_name = "FILE")]
    pub bungee_output: Option<PathBuf>,

    /// Directory for descriptors without an explicit output path
    #[arg(long, value_name = "DIR")]
    pub resource_dir: Option<PathBuf>,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
