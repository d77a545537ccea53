//! Shared pipeline behind the `diff` and `log` commands.
//!
//! Both commands follow the same steps:
//! 1. **Capture**: run git in the target repository, or read a captured file
//! 2. **Render**: convert the text with [`crate::render`]
//! 3. **Write**: persist the document, creating parent directories
//!
//! Capture and write failures abort the run before or after rendering; rendering itself
//! cannot fail.

use crate::core::{
    error::Result,
    files::{read_input, write_document},
    git::{GitRepo, HistoryRequest},
};
use crate::render::{render_with, Latex, Mode, RenderSummary};
use std::path::PathBuf;

/// Where the text to render comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Run git in the repository containing `repo_dir`
    Git {
        repo_dir: PathBuf,
        request: HistoryRequest,
    },
    /// Read previously captured output, `-` meaning stdin
    Captured { path: PathBuf, mode: Mode },
}

impl Source {
    pub fn mode(&self) -> Mode {
        match self {
            Source::Git { request, .. } => request.mode,
            Source::Captured { mode, .. } => *mode,
        }
    }

    /// Produce the raw text for this source
    pub fn capture(&self) -> Result<String> {
        match self {
            Source::Git { repo_dir, request } => GitRepo::open(repo_dir)?.history(request),
            Source::Captured { path, .. } => read_input(path),
        }
    }
}

/// A complete export job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub source: Source,
    pub output: PathBuf,
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub output: PathBuf,
    pub summary: RenderSummary,
}

/// Capture, render and write one document
pub fn export(request: &ExportRequest) -> Result<ExportReport> {
    let raw = request.source.capture()?;
    if raw.trim().is_empty() {
        log::info!("No changes captured, writing a document without sections");
    }

    let rendered = render_with(&Latex, &raw, request.source.mode());
    write_document(&request.output, &rendered.document)?;

    Ok(ExportReport {
        output: request.output.clone(),
        summary: rendered.summary,
    })
}
