//! Error types for chaps operations.
//!
//! This module defines [`ChapsError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Usage errors never reach this type; clap reports them and exits with 2
//! - Resolution errors (no project root, cwd outside the root) are raised
//!   before anything is spawned
//! - Failures inside Pants are not errors here; they surface as the exit code

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for chaps operations.
#[derive(Debug, Error)]
pub enum ChapsError {
    /// No project root marker was found above the working directory.
    #[error("No Pants project found at or above {start} (looked for pants.toml, pants.ini, pants, .git)")]
    ProjectRootNotFound { start: PathBuf },

    /// The working directory is not inside the configured project root.
    #[error("Current directory {cwd} is outside the project root {root}")]
    OutsideProject { cwd: PathBuf, root: PathBuf },

    /// A path component could not be expressed as UTF-8.
    #[error("Path is not valid UTF-8: {path}")]
    NonUtf8Path { path: PathBuf },

    /// The build executable could not be started.
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for chaps operations.
pub type Result<T> = std::result::Result<T, ChapsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_root_not_found_displays_start() {
        let err = ChapsError::ProjectRootNotFound {
            start: PathBuf::from("/tmp/nowhere"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/nowhere"));
        assert!(msg.contains("pants.toml"));
    }

    #[test]
    fn outside_project_displays_both_paths() {
        let err = ChapsError::OutsideProject {
            cwd: PathBuf::from("/elsewhere"),
            root: PathBuf::from("/repo"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/elsewhere"));
        assert!(msg.contains("/repo"));
    }

    #[test]
    fn spawn_displays_program_and_cause() {
        let err = ChapsError::Spawn {
            program: "pants".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'pants'"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ChapsError = io_err.into();
        assert!(matches!(err, ChapsError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: ChapsError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
