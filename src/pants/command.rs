//! Pants argument vector builder.

use std::fmt;
use std::path::{Path, PathBuf};

/// Executable used when no override is configured.
pub const DEFAULT_PROGRAM: &str = "pants";

/// A composed Pants invocation: the program and its discrete arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantsCommand {
    program: String,
    args: Vec<String>,
    dir: Option<PathBuf>,
}

impl PantsCommand {
    /// Start a command for `program` running `goal`.
    pub fn new(program: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec![goal.into()],
            dir: None,
        }
    }

    /// Run from `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments after the executable, goal first.
    pub fn argv(&self) -> &[String] {
        &self.args
    }

    /// Directory to run from, if not the current one.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// The goal this command runs.
    pub fn goal(&self) -> &str {
        &self.args[0]
    }
}

impl fmt::Display for PantsCommand {
    /// Renders as a shell-quoted line that would reproduce the same argv.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        f.write_str(&shell_words::join(words))
    }
}
