//! Git repository access and history capture.
//!
//! This module provides [`GitRepo`], which locates a repository through `git2` and
//! captures the text the renderer consumes by running the `git` binary in the
//! repository's working directory. The binary is used instead of `git2`'s diff printer
//! so the captured text is exactly what `git diff` and `git log --patch` print.
//!
//! # Public API
//! - [`GitRepo`]: Repository handle
//! - [`HistoryRequest`]: What to capture and with which options

use crate::core::error::{GitLatexError, Result};
use crate::render::Mode;
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters of a history capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub mode: Mode,
    /// Reference to diff against, or revision (range) to log
    pub reference: String,
    /// Lines of unified context
    pub context_lines: u32,
    /// Commit limit, only used for history
    pub max_commits: Option<usize>,
}

/// Options fixing the diff text shape regardless of user configuration
const PINNED_DIFF_OPTIONS: &[&str] = &[
    "--no-color",
    "--no-ext-diff",
    "--src-prefix=a/",
    "--dst-prefix=b/",
];

impl HistoryRequest {
    /// Arguments passed to `git`, without the executable itself
    ///
    /// Prefixes and the log format are pinned so user configuration such as
    /// `diff.mnemonicPrefix` or `format.pretty` cannot change the text shape. The
    /// reference always follows `--end-of-options` and is never read as an option.
    pub fn git_args(&self) -> Vec<String> {
        let mut args: Vec<String> = match self.mode {
            Mode::DiffOnly => vec!["diff".to_string(), "--patch".to_string()],
            Mode::FullHistory => vec![
                "log".to_string(),
                "--patch".to_string(),
                "--pretty=medium".to_string(),
                "--no-decorate".to_string(),
            ],
        };

        args.push(format!("--unified={}", self.context_lines));
        args.extend(PINNED_DIFF_OPTIONS.iter().map(|opt| opt.to_string()));

        if let (Mode::FullHistory, Some(max)) = (self.mode, self.max_commits) {
            args.push(format!("--max-count={max}"));
        }

        args.push("--end-of-options".to_string());
        args.push(self.reference.clone());
        args
    }

    /// Printable form of the git invocation, used in logs and errors
    pub fn command_line(&self) -> String {
        format!("git {}", self.git_args().join(" "))
    }
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            log::debug!("Repository discovery failed for {}: {e}", path.display());
            GitLatexError::not_a_repository(path)
        })?;
        Ok(GitRepo { repo })
    }

    pub fn get_workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or(GitLatexError::BareRepository)
    }

    /// Run git for `request` and return its standard output
    ///
    /// Output that is not valid UTF-8 is converted lossily, the renderer is best-effort.
    pub fn history(&self, request: &HistoryRequest) -> Result<String> {
        let workdir = self.get_workdir()?;
        let command_line = request.command_line();
        log::debug!("Running `{command_line}` in {}", workdir.display());

        let output = Command::new("git")
            .args(request.git_args())
            .current_dir(&workdir)
            .output()
            .map_err(|e| GitLatexError::git_spawn_failed(&command_line, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitLatexError::git_command_failed(command_line, &stderr));
        }

        log::debug!(
            "Captured {} bytes of {} output",
            output.stdout.len(),
            request.mode.description()
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
