//! List command implementation.
//!
//! The `chaps list` command lists every target defined directly in the
//! current directory. Extra arguments are accepted and ignored.

use crate::cli::args::ListArgs;
use crate::pants::PantsCommand;
use crate::target;

use super::dispatcher::{Command, Workspace};

/// The list command implementation.
pub struct ListCommand {
    workspace: Workspace,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(workspace: Workspace, args: ListArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for ListCommand {
    fn compose(&self) -> PantsCommand {
        if !self.args.args.is_empty() {
            tracing::debug!("Ignoring list arguments: {:?}", self.args.args);
        }

        self.workspace
            .pants("list")
            .arg(target::wildcard(self.workspace.relative()))
    }
}
