//! CLI command implementations.
//!
//! Each Pants-backed command implements the [`Command`] trait: it composes a
//! [`PantsCommand`](crate::pants::PantsCommand) and the trait runs it through
//! a [`Delegate`](crate::pants::Delegate).
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and resolves the project context
//! only for commands that address targets.

pub mod binary;
pub mod clean;
pub mod completions;
pub mod dispatcher;
pub mod fmt;
pub mod list;
pub mod repl;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, Workspace};
