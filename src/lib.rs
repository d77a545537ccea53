//! git-latex - Render git diffs and patch logs as color-coded LaTeX documents.
//!
//! The library converts the text printed by `git diff` or `git log --patch` into a LaTeX
//! document with one section per file (and per commit for logs), coloring added and
//! removed lines, file headers and hunk markers.
//!
//! # Public API
//! - [`render`]: The line classifier and document builder. Pure and infallible.
//! - [`core`]: Git access, configuration, file I/O, errors and terminal output
//! - [`commands`]: The `diff` and `log` command implementations used by the binary

pub mod commands;
pub mod core;
pub mod render;

// Re-export the public API for external users
pub use crate::core::{
    export,
    // Configuration
    Config,
    ExportReport,
    ExportRequest,
    // Error handling
    GitLatexError,
    // Git operations
    GitRepo,
    HistoryRequest,
    Result,
    Source,
};
pub use render::{render, render_with, DocumentBuilder, Latex, LineClass, Markup, Mode};
