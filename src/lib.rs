//! Chaps - a relative directory Pants wrapper for Python targets.
//!
//! Chaps resolves Pants target addresses against the current working
//! directory so `chaps test` inside `src/python/svc` means
//! `pants test.pytest src/python/svc:`. It only builds command lines; Pants
//! does the work and its exit code becomes chaps' exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`pants`] - Composing and running Pants command lines
//! - [`project`] - Project root discovery and the relative working path
//! - [`target`] - Target address resolution
//!
//! # Example
//!
//! ```
//! use chaps::target;
//!
//! assert_eq!(target::resolve("src/app", &["server"]), "src/app:server");
//! assert_eq!(target::recursive(&target::test_root("src/app")), "tests/app::");
//! ```

pub mod cli;
pub mod error;
pub mod pants;
pub mod project;
pub mod target;

pub use error::{ChapsError, Result};
