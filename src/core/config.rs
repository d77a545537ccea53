//! User configuration for default command-line values.
//!
//! The configuration lives in `config.json` inside the platform configuration directory
//! (see [`crate::core::dirs`]). Every field is optional; command-line flags take
//! precedence over anything set here.
//!
//! ```json
//! {
//!   "default_ref": "main",
//!   "context_lines": 5,
//!   "diff_output": "out/changes.tex",
//!   "log_output": "out/history.tex",
//!   "max_commits": 20
//! }
//! ```

use crate::core::dirs::get_config_file;
use crate::core::error::{GitLatexError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Reference diffed against, or revision logged, when none is given
    pub default_ref: String,
    /// Lines of unified context requested from git
    pub context_lines: u32,
    /// Output file for `diff` when `-o` is not given
    pub diff_output: PathBuf,
    /// Output file for `log` when `-o` is not given
    pub log_output: PathBuf,
    /// Limit on commits rendered by `log`
    pub max_commits: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ref: "HEAD".to_string(),
            context_lines: 3,
            diff_output: PathBuf::from("git-diff.tex"),
            log_output: PathBuf::from("git-log.tex"),
            max_commits: None,
        }
    }
}

impl Config {
    /// Load the configuration from `path`, or from the default location when `None`
    ///
    /// A missing file is not an error and yields [`Config::default`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => match get_config_file() {
                Ok(path) => Self::load_from(&path)?,
                Err(e) => {
                    log::debug!("No configuration directory ({e}), using defaults");
                    Self::default()
                }
            },
        };

        log::debug!("Effective configuration: {}", config.to_json());
        Ok(config)
    }

    /// Compact JSON form, in the same shape the config file uses
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }

    /// Load the configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| GitLatexError::config_read_failed(path, e))?;

        serde_json::from_str(&content).map_err(|e| GitLatexError::config_parse_failed(path, e))
    }
}
