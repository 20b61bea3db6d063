//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct; [`Commands`] is the fixed
//! table of subcommands and their argument schemas.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::pants::DEFAULT_PROGRAM;

/// Chaps - a relative directory Pants wrapper for Python targets.
///
/// Targets are resolved against the current directory, so `chaps run app`
/// inside `src/python/svc` runs `src/python/svc:app`.
#[derive(Debug, Parser)]
#[command(name = "chaps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Pants executable to run
    #[arg(long, global = true, env = "CHAPS_PANTS", default_value = DEFAULT_PROGRAM)]
    pub pants: String,

    /// Project root (overrides discovery from the current directory)
    #[arg(long, global = true, env = "CHAPS_ROOT")]
    pub root: Option<PathBuf>,

    /// Print the Pants command instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a binary using pants
    Binary(TargetArgs),

    /// Fix common format issues using the pants fmt goal
    Fmt(TargetArgs),

    /// List pants targets in the current directory
    List(ListArgs),

    /// Enter an IPython REPL
    Repl(TargetArgs),

    /// Run a target using pants
    Run(RunArgs),

    /// Clean pants
    #[command(name = "clean-all")]
    CleanAll,

    /// Use the test.pytest goal with pants
    Test(TestArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Target names relative to the current directory.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// Target names in the current directory (all targets if omitted)
    pub args: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Ignored; list always covers the whole directory
    #[arg(hide = true)]
    pub args: Vec<String>,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Target name in the current directory
    pub goal: String,

    /// Arguments passed through to the target unchanged
    ///
    /// Everything after the goal is forwarded, including anything that looks
    /// like a chaps flag; put global flags such as `--dry-run` before the goal.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `test` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TestArgs {
    /// Test all targets under the tests directory mirroring the current one
    #[arg(long)]
    pub all: bool,

    /// Python test coverage
    #[arg(long)]
    pub coverage: bool,

    /// Python stop on first error
    #[arg(long)]
    pub failfast: bool,

    /// Python test verbosity
    #[arg(long)]
    pub verbose: bool,

    /// Target names in the current directory (all targets if omitted)
    pub args: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
