//! Fmt command implementation.

use crate::cli::args::TargetArgs;
use crate::pants::PantsCommand;
use crate::target;

use super::dispatcher::{Command, Workspace};

/// The fmt command implementation.
pub struct FmtCommand {
    workspace: Workspace,
    args: TargetArgs,
}

impl FmtCommand {
    /// Create a new fmt command.
    pub fn new(workspace: Workspace, args: TargetArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for FmtCommand {
    fn compose(&self) -> PantsCommand {
        self.workspace
            .pants("fmt")
            .args(target::addresses(self.workspace.relative(), &self.args.args))
    }
}
