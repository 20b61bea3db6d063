//! Running a composed command.
//!
//! The [`Delegate`] trait is the seam between command handlers and the
//! outside world. [`ProcessDelegate`] actually spawns Pants,
//! [`DryRunDelegate`] only prints what would run, and [`RecordingDelegate`]
//! captures commands for tests.

use std::cell::RefCell;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Once;

use crate::error::{ChapsError, Result};

use super::command::PantsCommand;

/// Runs a composed command and reports its exit code.
pub trait Delegate {
    /// Run `command` to completion and return its exit code.
    fn run(&self, command: &PantsCommand) -> Result<i32>;
}

/// Spawns the command with inherited stdio and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessDelegate;

impl ProcessDelegate {
    /// Create a new process delegate.
    pub fn new() -> Self {
        Self
    }
}

impl Delegate for ProcessDelegate {
    fn run(&self, command: &PantsCommand) -> Result<i32> {
        tracing::debug!("Spawning: {}", command);

        // The child shares our process group, so a terminal Ctrl-C reaches it
        // directly. Outlive it and report whatever it exits with.
        ignore_interrupts();

        let mut cmd = Command::new(command.program());
        cmd.args(command.argv())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = command.dir() {
            cmd.current_dir(dir);
        }

        let mut child = cmd
            .spawn()
            .map_err(|source| ChapsError::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        let status = child.wait()?;
        let code = exit_code(status);
        tracing::debug!("{} exited with {}", command.program(), code);
        Ok(code)
    }
}

/// Install a no-op SIGINT handler once per process.
///
/// Handlers, unlike ignored dispositions, are reset on exec, so already
/// spawned and future children keep default signal behavior.
fn ignore_interrupts() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if let Err(e) = ctrlc::set_handler(|| {}) {
            tracing::debug!("Could not install interrupt handler: {}", e);
        }
    });
}

/// Exit code to report for a finished child.
///
/// On Unix a child killed by signal N reports `128 + N`, the shell convention.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Prints the command instead of running it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunDelegate;

impl Delegate for DryRunDelegate {
    fn run(&self, command: &PantsCommand) -> Result<i32> {
        println!("{}", command);
        Ok(0)
    }
}

/// Records every command and answers with a fixed exit code.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    exit_code: i32,
    commands: RefCell<Vec<PantsCommand>>,
}

impl RecordingDelegate {
    /// A delegate whose every run exits with `exit_code`.
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            commands: RefCell::new(Vec::new()),
        }
    }

    /// Commands seen so far, in order.
    pub fn commands(&self) -> Vec<PantsCommand> {
        self.commands.borrow().clone()
    }

    /// The most recent command, if any.
    pub fn last(&self) -> Option<PantsCommand> {
        self.commands.borrow().last().cloned()
    }
}

impl Delegate for RecordingDelegate {
    fn run(&self, command: &PantsCommand) -> Result<i32> {
        self.commands.borrow_mut().push(command.clone());
        Ok(self.exit_code)
    }
}
