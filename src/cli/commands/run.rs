//! Run command implementation.
//!
//! The `chaps run <goal> [args...]` command runs one target from the current
//! directory, passing the remaining arguments through unchanged.

use crate::cli::args::RunArgs;
use crate::pants::PantsCommand;
use crate::target;

use super::dispatcher::{Command, Workspace};

/// The run command implementation.
pub struct RunCommand {
    workspace: Workspace,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(workspace: Workspace, args: RunArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for RunCommand {
    fn compose(&self) -> PantsCommand {
        self.workspace
            .pants("run")
            .args(target::addresses(
                self.workspace.relative(),
                std::slice::from_ref(&self.args.goal),
            ))
            .args(self.args.args.iter().cloned())
    }
}
