//! Composing and running Pants command lines.

pub mod command;
pub mod delegate;

pub use command::{PantsCommand, DEFAULT_PROGRAM};
pub use delegate::{exit_code, Delegate, DryRunDelegate, ProcessDelegate, RecordingDelegate};
