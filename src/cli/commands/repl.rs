//! Repl command implementation.
//!
//! The `chaps repl` command opens an IPython REPL with the resolved targets
//! on the path.

use crate::cli::args::TargetArgs;
use crate::pants::PantsCommand;
use crate::target;

use super::dispatcher::{Command, Workspace};

/// Flag selecting the IPython REPL for Python targets.
pub const IPYTHON_FLAG: &str = "--repl-py-ipython";

/// The repl command implementation.
pub struct ReplCommand {
    workspace: Workspace,
    args: TargetArgs,
}

impl ReplCommand {
    /// Create a new repl command.
    pub fn new(workspace: Workspace, args: TargetArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for ReplCommand {
    fn compose(&self) -> PantsCommand {
        self.workspace
            .pants("repl")
            .arg(IPYTHON_FLAG)
            .args(target::addresses(self.workspace.relative(), &self.args.args))
    }
}
