//! Clean-all command implementation.

use std::path::PathBuf;

use crate::pants::PantsCommand;

use super::dispatcher::Command;

/// Pants goal that wipes all build state.
pub const CLEAN_ALL_GOAL: &str = "clean-all";

/// The clean-all command implementation.
///
/// Resolves no targets. Runs from the project root when one is known,
/// otherwise from the current directory.
pub struct CleanAllCommand {
    program: String,
    root: Option<PathBuf>,
}

impl CleanAllCommand {
    /// Create a new clean-all command.
    pub fn new(program: impl Into<String>, root: Option<PathBuf>) -> Self {
        Self {
            program: program.into(),
            root,
        }
    }
}

impl Command for CleanAllCommand {
    fn compose(&self) -> PantsCommand {
        let command = PantsCommand::new(&self.program, CLEAN_ALL_GOAL);
        match &self.root {
            Some(root) => command.current_dir(root),
            None => command,
        }
    }
}
