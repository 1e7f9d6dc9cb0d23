//! Error types for chroot-pbuilder
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Preflight check errors
#[derive(Error, Debug)]
pub enum PreflightError {
    /// A required external command is not resolvable
    #[error("required command not found: {command}")]
    MissingCommand { command: String },
}

/// Path resolution errors
#[derive(Error, Debug)]
pub enum PathError {
    /// Current working directory could not be determined
    #[error("Failed to determine current directory: {error}")]
    CurrentDir { error: String },

    /// Home directory could not be determined
    #[error("Failed to determine home directory")]
    HomeDirNotFound,

    /// Distribution must be a non-empty string
    #[error("Distribution must not be empty")]
    EmptyDistribution,
}

/// Environment operation errors (create/update/login)
#[derive(Error, Debug)]
pub enum EnvError {
    /// Failed to remove an existing base archive
    #[error("Failed to remove existing archive '{path}': {error}")]
    ArchiveRemove { path: PathBuf, error: String },

    /// Failed to create the bind-mount directory
    #[error("Failed to create bind mount directory '{path}': {error}")]
    BindMountCreate { path: PathBuf, error: String },

    /// The external tool could not be started
    #[error("Failed to run pbuilder {operation}: {error}")]
    ToolSpawn { operation: String, error: String },

    /// The external tool exited with a non-zero status
    #[error("pbuilder {operation} failed with {status}")]
    ToolExit {
        operation: String,
        status: ExitStatus,
    },
}
