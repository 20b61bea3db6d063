//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`Workspace`] for what every target-resolving command needs
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::pants::{Delegate, PantsCommand};
use crate::project::{find_project_root, InvocationContext};

/// Trait for command implementations.
///
/// Each Pants-backed subcommand composes one [`PantsCommand`]; running it is
/// the same for all of them.
pub trait Command {
    /// Compose the Pants invocation for this command.
    fn compose(&self) -> PantsCommand;

    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `delegate` - Runs the composed command
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code Pants reported.
    fn execute(&self, delegate: &dyn Delegate) -> Result<CommandResult> {
        let command = self.compose();
        tracing::debug!("Composed command: {}", command);
        let code = delegate.run(&command)?;
        Ok(CommandResult::from_exit_code(code))
    }
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Mirror a child's exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }

    /// Exit code for this process.
    ///
    /// Only the low byte survives; a failure whose low byte is 0 (possible
    /// on Windows, e.g. 256) is reported as 1 so it never reads as success.
    pub fn process_exit_code(&self) -> u8 {
        match self.exit_code as u8 {
            0 if !self.success => 1,
            code => code,
        }
    }
}

/// The Pants executable plus where chaps was invoked from.
#[derive(Debug, Clone)]
pub struct Workspace {
    program: String,
    context: InvocationContext,
}

impl Workspace {
    /// Create a workspace.
    pub fn new(program: impl Into<String>, context: InvocationContext) -> Self {
        Self {
            program: program.into(),
            context,
        }
    }

    /// Relative working path used as the target namespace.
    pub fn relative(&self) -> &str {
        self.context.relative()
    }

    /// Start a Pants command for `goal`, run from the project root.
    pub fn pants(&self, goal: &str) -> PantsCommand {
        PantsCommand::new(&self.program, goal).current_dir(self.context.root())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given working directory.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    /// Get the working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Dispatch and execute a command.
    ///
    /// Resolves the project context only for commands that address targets,
    /// so resolution errors surface before anything is spawned.
    pub fn dispatch(&self, cli: &Cli, delegate: &dyn Delegate) -> Result<CommandResult> {
        let program = self.program(&cli.pants);

        match &cli.command {
            Commands::Binary(args) => {
                let workspace = self.workspace(cli, &program)?;
                let cmd = super::binary::BinaryCommand::new(workspace, args.clone());
                cmd.execute(delegate)
            }
            Commands::Fmt(args) => {
                let workspace = self.workspace(cli, &program)?;
                let cmd = super::fmt::FmtCommand::new(workspace, args.clone());
                cmd.execute(delegate)
            }
            Commands::List(args) => {
                let workspace = self.workspace(cli, &program)?;
                let cmd = super::list::ListCommand::new(workspace, args.clone());
                cmd.execute(delegate)
            }
            Commands::Repl(args) => {
                let workspace = self.workspace(cli, &program)?;
                let cmd = super::repl::ReplCommand::new(workspace, args.clone());
                cmd.execute(delegate)
            }
            Commands::Run(args) => {
                let workspace = self.workspace(cli, &program)?;
                let cmd = super::run::RunCommand::new(workspace, args.clone());
                cmd.execute(delegate)
            }
            Commands::CleanAll => {
                let root = match &cli.root {
                    Some(root) => Some(root.clone()),
                    None => find_project_root(&self.cwd),
                };
                let cmd = super::clean::CleanAllCommand::new(program, root);
                cmd.execute(delegate)
            }
            Commands::Test(args) => {
                let workspace = self.workspace(cli, &program)?;
                let options = super::test::TestOptions::from(args);
                let cmd = super::test::TestCommand::new(workspace, options, args.args.clone());
                cmd.execute(delegate)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute()
            }
        }
    }

    fn workspace(&self, cli: &Cli, program: &str) -> Result<Workspace> {
        let context = InvocationContext::discover(&self.cwd, cli.root.as_deref())?;
        Ok(Workspace::new(program, context))
    }

    /// Commands run from the project root, so a relative program path like
    /// `./pants` is anchored to where chaps was invoked. Bare names are left
    /// for `PATH` lookup.
    fn program(&self, pants: &str) -> String {
        let path = Path::new(pants);
        if path.is_relative() && path.components().count() > 1 {
            self.cwd.join(path).to_string_lossy().into_owned()
        } else {
            pants.to_string()
        }
    }
}
