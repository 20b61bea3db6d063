//! Binary command implementation.
//!
//! The `chaps binary` command builds binaries for targets in the current
//! directory.

use crate::cli::args::TargetArgs;
use crate::pants::PantsCommand;
use crate::target;

use super::dispatcher::{Command, Workspace};

/// The binary command implementation.
pub struct BinaryCommand {
    workspace: Workspace,
    args: TargetArgs,
}

impl BinaryCommand {
    /// Create a new binary command.
    pub fn new(workspace: Workspace, args: TargetArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for BinaryCommand {
    fn compose(&self) -> PantsCommand {
        self.workspace
            .pants("binary")
            .args(target::addresses(self.workspace.relative(), &self.args.args))
    }
}
