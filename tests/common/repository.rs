//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with various states
//! and for running the git-latex binary against them.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use git_latex::core::error::{GitLatexError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result. Both temporary directories must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    /// Directory for rendered documents, kept outside the working tree
    pub out_dir: TempDir,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of an output file inside the output directory
    pub fn out(&self, name: &str) -> PathBuf {
        self.out_dir.path().join(name)
    }

    /// Read a rendered document from the output directory
    pub fn read_out(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.out(name))?)
    }

    /// The git-latex binary, run inside the repository with an isolated configuration
    pub fn git_latex(&self) -> Result<Command> {
        git_latex_in(&self.path, &self.out_dir.path().join("config.json"))
    }
}

/// The git-latex binary, run in `dir` with configuration read from `config`
pub fn git_latex_in(dir: &Path, config: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("git-latex").map_err(|e| {
        GitLatexError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, e))
    })?;
    cmd.current_dir(dir).arg("--config").arg(config);
    Ok(cmd)
}

fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(GitLatexError::Io)?;
    Ok(())
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository,
/// and sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
        out_dir: TempDir::new()?,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Adds a file to the git index ("." for all files)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

/// Sets a repository-local git configuration value
pub fn git_config(repo_path: &Path, key: &str, value: &str) -> Result<()> {
    git(repo_path, &["config", key, value])
}

/// Writes, stages and commits one file
pub fn commit_file(repo_path: &Path, filename: &str, content: &str, message: &str) -> Result<()> {
    create_file(repo_path, filename, content)?;
    git_add(repo_path, filename)?;
    git_commit(repo_path, message)
}
