//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitLatexError`] which covers every failure of the collaborators
//! around the renderer: repository discovery, running git, reading input, loading
//! configuration and writing the document. Rendering itself cannot fail. It uses
//! `thiserror` for ergonomic error definitions and includes constructors for the
//! variants that carry context.
//!
//! # Public API
//! - [`GitLatexError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitLatexError>`
//!
//! # Error Categories
//! - **Git**: Repository not found or bare, git binary missing, git command failures
//! - **Input**: Unreadable input files
//! - **Output**: Directory creation and write failures
//! - **Configuration**: Unreadable or malformed config files

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-latex
#[derive(Error, Debug)]
pub enum GitLatexError {
    // Git repository errors
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Repository has no working directory")]
    BareRepository,

    #[error("git executable not found. Is git installed and on PATH?")]
    GitNotFound,

    #[error("Failed to run {command}: {source}")]
    GitSpawnFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    // Input errors
    #[error("Failed to read input '{path}': {source}")]
    InputReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Output errors
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Could not determine configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using GitLatexError
pub type Result<T> = std::result::Result<T, GitLatexError>;

impl GitLatexError {
    /// Create a not-a-repository error for a specific path
    pub fn not_a_repository(path: impl Into<PathBuf>) -> Self {
        Self::NotARepository { path: path.into() }
    }

    /// Create a git spawn error, mapping a missing executable to [`GitLatexError::GitNotFound`]
    pub fn git_spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::GitNotFound;
        }
        Self::GitSpawnFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a git command failed error from captured stderr
    pub fn git_command_failed(command: impl Into<String>, stderr: &str) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            stderr: stderr.trim().to_string(),
        }
    }

    /// Create an input read failed error
    pub fn input_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an output directory creation failed error
    pub fn output_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::OutputDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an output write failed error
    pub fn output_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
