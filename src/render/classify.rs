//! Prefix-based classification of raw diff and log lines.
//!
//! Every line of captured git output maps to exactly one [`LineClass`]. The rules are
//! held in [`RULES`], an ordered table evaluated top to bottom where the first match
//! wins. Order matters because prefixes overlap: `+++ b/file` also starts with `+`.
//!
//! # Public API
//! - [`Mode`]: Which shape of git output is being rendered
//! - [`LineClass`]: Classification tag for a single line
//! - [`classify`]: Classify a line under a mode
//! - [`short_commit_id`]: Extract the display identifier from a commit line
//! - [`file_label`]: Extract the file label from a `diff --git` line

/// Shape of the captured git output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Output of a single `git diff` between two references
    DiffOnly,
    /// Output of `git log --patch`, one record per commit
    FullHistory,
}

impl Mode {
    /// Human readable name used in logs and titles
    pub fn description(&self) -> &'static str {
        match self {
            Mode::DiffOnly => "diff",
            Mode::FullHistory => "history",
        }
    }
}

/// Classification tag for one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    CommitHeader,
    AuthorOrDate,
    FileDiffHeader,
    FileHeaderPath,
    HunkMarker,
    Addition,
    Deletion,
    Context,
}

/// Maximum width of the commit identifier shown in section headings
pub const SHORT_ID_WIDTH: usize = 7;

/// Prefix that introduces the old-tree path in a `diff --git` line
const OLD_TREE_PREFIX: &str = "a/";

/// One classification rule: a set of prefixes and whether the rule only applies to history output
struct Rule {
    prefixes: &'static [&'static str],
    history_only: bool,
    class: LineClass,
}

/// Classification rules in priority order. Lines matching none of them are [`LineClass::Context`].
const RULES: &[Rule] = &[
    Rule {
        prefixes: &["commit "],
        history_only: true,
        class: LineClass::CommitHeader,
    },
    Rule {
        prefixes: &[
            "Author:",
            "AuthorDate:",
            "Commit:",
            "CommitDate:",
            "Date:",
            "Merge:",
        ],
        history_only: true,
        class: LineClass::AuthorOrDate,
    },
    Rule {
        prefixes: &["diff --git"],
        history_only: false,
        class: LineClass::FileDiffHeader,
    },
    Rule {
        prefixes: &["+++", "---"],
        history_only: false,
        class: LineClass::FileHeaderPath,
    },
    Rule {
        prefixes: &["@@"],
        history_only: false,
        class: LineClass::HunkMarker,
    },
    Rule {
        prefixes: &["+"],
        history_only: false,
        class: LineClass::Addition,
    },
    Rule {
        prefixes: &["-"],
        history_only: false,
        class: LineClass::Deletion,
    },
];

/// Classify a single line of git output
///
/// # Examples
/// ```
/// use git_latex::render::{classify, LineClass, Mode};
///
/// assert_eq!(classify("+++ b/foo.go", Mode::DiffOnly), LineClass::FileHeaderPath);
/// assert_eq!(classify("+added", Mode::DiffOnly), LineClass::Addition);
/// assert_eq!(classify("commit abc123", Mode::DiffOnly), LineClass::Context);
/// assert_eq!(classify("commit abc123", Mode::FullHistory), LineClass::CommitHeader);
/// ```
pub fn classify(line: &str, mode: Mode) -> LineClass {
    RULES
        .iter()
        .filter(|rule| !rule.history_only || mode == Mode::FullHistory)
        .find(|rule| rule.prefixes.iter().any(|p| line.starts_with(p)))
        .map_or(LineClass::Context, |rule| rule.class)
}

/// Extract the display identifier from a `commit <hash>` line
///
/// The hash is truncated to [`SHORT_ID_WIDTH`] characters. A commit line without a hash
/// yields an empty identifier.
pub fn short_commit_id(line: &str) -> String {
    line.split_whitespace()
        .nth(1)
        .map(|hash| hash.chars().take(SHORT_ID_WIDTH).collect())
        .unwrap_or_default()
}

/// Extract the file label from a `diff --git a/<path> b/<path>` line
///
/// Returns `None` when the line has fewer than four whitespace-separated tokens, in which
/// case callers keep whatever label they already had.
pub fn file_label(line: &str) -> Option<String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return None;
    }

    let path = tokens[2];
    Some(path.strip_prefix(OLD_TREE_PREFIX).unwrap_or(path).to_string())
}
