//! Collaborators around the renderer.
//!
//! This module provides everything git-latex needs besides rendering itself: locating the
//! repository and running git, reading captured input, writing documents, configuration,
//! error handling and terminal output.

pub mod config;
pub mod dirs;
pub mod error;
pub mod export;
pub mod files;
pub mod git;
pub mod output;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitLatexError, Result};

// === Configuration ===
// Optional JSON file providing defaults for command-line values
pub use config::Config;

// === Git operations ===
// Repository discovery and history capture
pub use git::{GitRepo, HistoryRequest};

// === Export pipeline ===
// Capture, render and write in one call
pub use export::{export, ExportReport, ExportRequest, Source};

// === File access ===
pub use files::{read_input, write_document, STDIN_PATH};

// === Output formatting ===
// Unified terminal reporting for consistent CLI presentation
pub use output::{format_summary, print_error, print_info, print_success};
